//! Token persistence seam.
//!
//! DESIGN
//! ======
//! Persistent storage is an ambient dependency in the browser. Views never
//! touch it directly; they go through [`TokenStore`] so flows can be tested
//! against [`MemoryTokenStore`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::types::Token;

/// Fixed storage key for the bearer token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Read/write/delete of the single persisted token.
///
/// Operations are infallible to callers: implementations log storage failures
/// and carry on, the same as a browser that refuses a `localStorage` write.
pub trait TokenStore {
    /// Current token, or `None` when absent.
    fn get(&self) -> Option<Token>;
    /// Store `token`, overwriting any previous value.
    fn set(&self, token: &Token);
    /// Remove the token. Clearing an empty store is a no-op.
    fn clear(&self);

    /// Derived auth flag: a token exists.
    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}

/// In-process store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<Token>>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `token`.
    #[must_use]
    pub fn with_token(token: Token) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(token))) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Token> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &Token) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}
