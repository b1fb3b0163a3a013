//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context. The navbar reads it to show the
//! logout button, pages write flow outcomes into it, and a single effect in
//! `util::auth` turns a queued redirect into router navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use authflow::{AuthEvent, AuthObserver, Outcome, PrivateView, Route, TokenStore, User};

/// Observer state plus the bits of UI coordination that hang off it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub observer: AuthObserver,
    /// A login or signup request is in flight.
    pub pending: bool,
    /// Route to navigate to on the next effect pass.
    pub redirect: Option<Route>,
}

impl AuthState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.observer.is_logged_in()
    }

    /// Re-derive login state after a route change and queue a redirect when
    /// the new route is closed to an anonymous visitor.
    pub fn navigated(&mut self, path: &str, store: &impl TokenStore) {
        self.observer.on_navigate(path, store);
        if let Some(to) = self.observer.route().and_then(|route| self.observer.guard(route)) {
            log::debug!("{path} requires login; redirecting to {}", to.path());
            self.redirect = Some(to);
        }
    }

    fn apply(&mut self, event: Option<AuthEvent>) {
        if let Some(event) = event {
            self.observer.handle(event);
        }
    }

    /// Settle a login/signup/logout outcome. Returns the alert text to show,
    /// if any.
    pub fn follow(&mut self, outcome: Outcome) -> Option<String> {
        self.pending = false;
        match outcome {
            Outcome::Navigate { to, event } => {
                self.apply(event);
                self.redirect = Some(to);
                None
            }
            Outcome::Alert(message) => Some(message),
        }
    }

    /// Settle the private-view fetch. Returns the user to render, if any.
    pub fn follow_private(&mut self, view: PrivateView) -> Option<User> {
        match view {
            PrivateView::Render(user) => Some(user),
            PrivateView::Redirect { to, event } => {
                self.apply(event);
                self.redirect = Some(to);
                None
            }
        }
    }

    /// Take the queued redirect, leaving none behind.
    pub fn take_redirect(&mut self) -> Option<Route> {
        self.redirect.take()
    }
}
