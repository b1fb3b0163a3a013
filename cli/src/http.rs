//! `reqwest` implementation of the auth API.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use authflow::api::{interpret_login, interpret_private, interpret_signup};
use authflow::{AuthApi, AuthError, Credentials, Endpoint, Token, User, endpoint_url};

pub(crate) const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3001/";

#[derive(Clone, Debug)]
pub(crate) struct ReqwestAuthApi {
    client: reqwest::Client,
    base: String,
}

impl ReqwestAuthApi {
    pub(crate) fn new(base: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base: base.to_owned() })
    }

    pub(crate) fn url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.base, endpoint)
    }
}

fn network(err: reqwest::Error) -> AuthError {
    AuthError::Network(err.to_string())
}

async fn read(resp: reqwest::Response) -> Result<(u16, String), AuthError> {
    let status = resp.status().as_u16();
    let body = resp.text().await.map_err(network)?;
    tracing::debug!(status, "auth api response");
    Ok((status, body))
}

#[async_trait(?Send)]
impl AuthApi for ReqwestAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError> {
        let resp = self
            .client
            .post(self.url(Endpoint::Login))
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(resp).await?;
        interpret_login(status, &body)
    }

    async fn signup(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let resp = self
            .client
            .post(self.url(Endpoint::Signup))
            .json(credentials)
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(resp).await?;
        interpret_signup(status, &body)
    }

    async fn fetch_private(&self, token: &Token) -> Result<User, AuthError> {
        let resp = self
            .client
            .get(self.url(Endpoint::Private))
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read(resp).await?;
        interpret_private(status, &body)
    }
}
