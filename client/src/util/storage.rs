//! Browser `localStorage` token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under `authflow::TOKEN_KEY` so it survives reloads. Outside
//! the browser (SSR, native tests) reads see no token and writes are dropped,
//! keeping server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use authflow::{Token, TokenStore};

/// [`TokenStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<Token> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(authflow::TOKEN_KEY).ok().flatten()?;
            Token::new(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn set(&self, token: &Token) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token not saved");
                return;
            };
            if storage.set_item(authflow::TOKEN_KEY, token.as_str()).is_err() {
                log::warn!("failed to write {} to localStorage", authflow::TOKEN_KEY);
            }
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.remove_item(authflow::TOKEN_KEY).is_err() {
                log::warn!("failed to remove {} from localStorage", authflow::TOKEN_KEY);
            }
        }
    }
}
