//! Auth state machine driven by navigation and flow events.
//!
//! DESIGN
//! ======
//! The "logged in" flag is a function of token presence, re-derived on every
//! route change. Flows that know the answer already (login, logout, a failed
//! authenticated fetch) push an explicit event instead of waiting for the next
//! navigation.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

use crate::route::Route;
use crate::store::TokenStore;

/// Derived authentication state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated,
}

impl AuthState {
    fn from_token_presence(present: bool) -> Self {
        if present { Self::Authenticated } else { Self::Anonymous }
    }
}

/// Input to [`AuthObserver::handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    /// First evaluation when the UI mounts.
    Mounted { token_present: bool },
    /// A route change; state is re-derived from the store.
    Navigated { route: Option<Route>, token_present: bool },
    LoginSucceeded,
    LoggedOut,
    /// An authenticated request failed; the token is treated as invalid.
    FetchFailed,
}

/// Two-state observer consumed by the navbar and route guards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthObserver {
    state: AuthState,
    route: Option<Route>,
}

impl AuthObserver {
    /// Observer initialised from whatever the store holds at mount.
    pub fn mount(store: &impl TokenStore) -> Self {
        let mut observer = Self::default();
        observer.handle(AuthEvent::Mounted { token_present: store.has_token() });
        observer
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Last route seen by [`Self::on_navigate`], `None` for unknown paths or
    /// before the first navigation.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        self.route
    }

    /// Apply one event and return the resulting state.
    pub fn handle(&mut self, event: AuthEvent) -> AuthState {
        let next = match event {
            AuthEvent::Mounted { token_present } => AuthState::from_token_presence(token_present),
            AuthEvent::Navigated { route, token_present } => {
                self.route = route;
                AuthState::from_token_presence(token_present)
            }
            AuthEvent::LoginSucceeded => AuthState::Authenticated,
            AuthEvent::LoggedOut | AuthEvent::FetchFailed => AuthState::Anonymous,
        };
        if next != self.state {
            log::debug!("auth state {:?} -> {:?} on {:?}", self.state, next, event);
        }
        self.state = next;
        next
    }

    /// Re-read the store after a route change.
    pub fn on_navigate(&mut self, path: &str, store: &impl TokenStore) -> AuthState {
        self.handle(AuthEvent::Navigated {
            route: Route::from_path(path),
            token_present: store.has_token(),
        })
    }

    /// Where a visit to `route` must be redirected, if anywhere.
    #[must_use]
    pub fn guard(&self, route: Route) -> Option<Route> {
        if route.requires_auth() && !self.is_logged_in() { Some(Route::Login) } else { None }
    }
}
