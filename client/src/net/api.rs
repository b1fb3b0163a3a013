//! REST client for the auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `AuthError::Network`; status and body decoding is
//! delegated to `authflow::api::interpret_*` so the browser and the CLI agree
//! on what counts as success.

#![allow(clippy::unused_async)]
#![cfg_attr(not(feature = "hydrate"), allow(unused_variables))]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use authflow::{AuthApi, AuthError, Credentials, Endpoint, Token, User, endpoint_url};

/// API base used when `BACKEND_URL` was not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3001/";

/// Base URL of the auth API, baked in from `BACKEND_URL` at compile time.
#[must_use]
pub fn backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at [`backend_url`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(backend_url())
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.base, endpoint)
    }
}

#[cfg(not(feature = "hydrate"))]
fn unavailable() -> AuthError {
    AuthError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

/// Status and body text of a finished request.
#[cfg(feature = "hydrate")]
async fn read(resp: gloo_net::http::Response) -> Result<(u16, String), AuthError> {
    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    Ok((status, body))
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(Endpoint::Login))
                .json(credentials)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            let (status, body) = read(resp).await?;
            authflow::api::interpret_login(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(Endpoint::Signup))
                .json(credentials)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            let (status, body) = read(resp).await?;
            authflow::api::interpret_signup(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }

    async fn fetch_private(&self, token: &Token) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(Endpoint::Private))
                .header("Content-Type", "application/json")
                .header("Authorization", &token.bearer())
                .send()
                .await
                .map_err(network)?;
            let (status, body) = read(resp).await?;
            authflow::api::interpret_private(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(unavailable())
        }
    }
}
