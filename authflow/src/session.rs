//! View-level auth flows over a token store and an API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call one method per user action and act on the returned value:
//! navigate (feeding the carried event to their [`AuthObserver`]) or show an
//! alert. `Session` itself holds no auth state; the store is the source of
//! truth.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is logged with its detail and then collapsed to the flow's
//! generic alert (login/signup) or a redirect to `/login` (private view).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::api::AuthApi;
use crate::notice;
use crate::observer::{AuthEvent, AuthObserver};
use crate::route::Route;
use crate::store::TokenStore;
use crate::types::{Credentials, SignupForm, User};

/// Result of a login, signup or logout action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Go to `to`, after applying `event` to the observer when present.
    Navigate { to: Route, event: Option<AuthEvent> },
    /// Show the message and stay on the current view.
    Alert(String),
}

impl Outcome {
    fn alert(message: &str) -> Self {
        Self::Alert(message.to_owned())
    }

    #[must_use]
    pub fn event(&self) -> Option<AuthEvent> {
        match self {
            Self::Navigate { event, .. } => *event,
            Self::Alert(_) => None,
        }
    }
}

/// What the private route must display.
#[derive(Clone, Debug, PartialEq)]
pub enum PrivateView {
    Redirect { to: Route, event: Option<AuthEvent> },
    Render(User),
}

impl PrivateView {
    #[must_use]
    pub fn event(&self) -> Option<AuthEvent> {
        match self {
            Self::Redirect { event, .. } => *event,
            Self::Render(_) => None,
        }
    }
}

/// Token store + API client pair driving the auth flows.
#[derive(Clone, Debug)]
pub struct Session<S, A> {
    store: S,
    api: A,
}

impl<S: TokenStore, A: AuthApi> Session<S, A> {
    pub fn new(store: S, api: A) -> Self {
        Self { store, api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Observer seeded from the current store contents.
    pub fn observer(&self) -> AuthObserver {
        AuthObserver::mount(&self.store)
    }

    /// Submit the login form. On success the token is stored and the view
    /// moves to the private route; on any failure nothing is stored.
    pub async fn submit_login(&self, credentials: Credentials) -> Outcome {
        if let Err(err) = credentials.validate() {
            return Outcome::alert(notice::login_failure(&err));
        }
        match self.api.login(&credentials).await {
            Ok(token) => {
                self.store.set(&token);
                log::info!("logged in as {}", credentials.email);
                Outcome::Navigate { to: Route::Private, event: Some(AuthEvent::LoginSucceeded) }
            }
            Err(err) => {
                log::warn!("login failed for {}: {err}", credentials.email);
                Outcome::alert(notice::login_failure(&err))
            }
        }
    }

    /// Submit the signup form. A password/confirmation mismatch is rejected
    /// before any request is made.
    pub async fn submit_signup(&self, form: &SignupForm) -> Outcome {
        let credentials = match form.credentials() {
            Ok(credentials) => credentials,
            Err(err) => return Outcome::alert(notice::signup_failure(&err)),
        };
        match self.api.signup(&credentials).await {
            Ok(()) => {
                log::info!("created user {}", credentials.email);
                Outcome::Navigate { to: Route::Login, event: None }
            }
            Err(err) => {
                log::warn!("signup failed for {}: {err}", credentials.email);
                Outcome::alert(notice::signup_failure(&err))
            }
        }
    }

    /// Resolve the private view: redirect without a request when there is no
    /// token, otherwise fetch the user once. A failed fetch clears the token.
    pub async fn load_private(&self) -> PrivateView {
        let Some(token) = self.store.get() else {
            log::debug!("no token; redirecting to {}", Route::Login.path());
            return PrivateView::Redirect { to: Route::Login, event: None };
        };
        match self.api.fetch_private(&token).await {
            Ok(user) => PrivateView::Render(user),
            Err(err) => {
                log::warn!("private fetch failed: {err}");
                self.store.clear();
                PrivateView::Redirect { to: Route::Login, event: Some(AuthEvent::FetchFailed) }
            }
        }
    }

    /// Drop the token and return to the login view. Safe to call when already
    /// logged out.
    pub fn logout(&self) -> Outcome {
        self.store.clear();
        log::info!("logged out");
        Outcome::Navigate { to: Route::Login, event: Some(AuthEvent::LoggedOut) }
    }
}
