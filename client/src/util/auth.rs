//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never navigate directly. They settle flow outcomes into the shared
//! `AuthState`, and the effects installed here re-evaluate the observer on
//! every path change and perform queued redirects.

use authflow::{Outcome, Session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::HttpAuthApi;
use crate::state::auth::AuthState;
use crate::util::storage::LocalStorageTokenStore;

/// Session type used by every page.
pub type ClientSession = Session<LocalStorageTokenStore, HttpAuthApi>;

/// Fresh session over `localStorage` and the configured API base.
pub fn client_session() -> ClientSession {
    Session::new(LocalStorageTokenStore, HttpAuthApi::from_env())
}

/// Install the observer and redirect effects. Must run inside the `<Router>`.
pub fn install_auth_effects(auth: RwSignal<AuthState>) {
    let location = use_location();
    Effect::new(move || {
        let path = location.pathname.get();
        auth.update(|state| state.navigated(&path, &LocalStorageTokenStore));
    });

    let navigate = use_navigate();
    Effect::new(move || {
        if auth.with(|state| state.redirect.is_none()) {
            return;
        }
        if let Some(route) = auth.try_update(AuthState::take_redirect).flatten() {
            navigate(route.path(), NavigateOptions::default());
        }
    });
}

/// Record `outcome` in auth state and surface any alert. The auth signal is
/// app-wide, so an outcome landing after its page is gone still queues its
/// redirect.
pub fn settle(auth: RwSignal<AuthState>, outcome: Outcome) {
    if let Some(message) = auth.try_update(|state| state.follow(outcome)).flatten() {
        show_alert(&message);
    }
}

/// Blocking browser alert; logged instead when there is no window.
pub fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_ok() {
                return;
            }
        }
    }
    log::warn!("alert: {message}");
}
