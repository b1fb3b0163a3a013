//! REST contract with the auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends implement [`AuthApi`] over their own HTTP stack and hand the raw
//! `(status, body)` pair to the `interpret_*` functions here, so response
//! decoding is identical in the browser and on the command line.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AuthError;
use crate::types::{Credentials, Token, User};

/// `msg` value the API sends when signup created the account.
pub const SIGNUP_CREATED_MSG: &str = "Nuevo usuario creado";

/// The three endpoints of the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    Private,
}

impl Endpoint {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Private => "private",
        }
    }
}

/// Join the API base URL and an endpoint name with exactly one `/`.
#[must_use]
pub fn endpoint_url(base: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint.name())
}

/// HTTP calls against the auth API.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded UI event loop.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST login`. Yields the token from a 2xx body carrying `jwt_token`.
    async fn login(&self, credentials: &Credentials) -> Result<Token, AuthError>;
    /// `POST signup`. Succeeds only on the [`SIGNUP_CREATED_MSG`] body.
    async fn signup(&self, credentials: &Credentials) -> Result<(), AuthError>;
    /// `GET private` with `Authorization: Bearer <token>`.
    async fn fetch_private(&self, token: &Token) -> Result<User, AuthError>;
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Text of a body field. Non-string values keep their JSON rendering.
fn field_text(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// `msg` field of an error body, if the body has one.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body).ok().and_then(|v| field_text(&v, "msg"))
}

fn check_status(status: u16, body: &str) -> Result<(), AuthError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(AuthError::Status { status, message: error_message(body) })
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::MalformedBody(e.to_string()))
}

/// Decode a `login` response.
///
/// # Errors
///
/// `Status` on non-2xx, `MalformedBody` on non-JSON, `MissingToken` when the
/// body lacks a non-empty string `jwt_token`.
pub fn interpret_login(status: u16, body: &str) -> Result<Token, AuthError> {
    check_status(status, body)?;
    let resp: Value = parse(body)?;
    resp.get("jwt_token")
        .and_then(Value::as_str)
        .and_then(Token::new)
        .ok_or(AuthError::MissingToken)
}

/// Decode a `signup` response.
///
/// # Errors
///
/// `Status` on non-2xx, `MalformedBody` on non-JSON, `SignupRejected` when the
/// message is anything but [`SIGNUP_CREATED_MSG`].
pub fn interpret_signup(status: u16, body: &str) -> Result<(), AuthError> {
    check_status(status, body)?;
    let resp: Value = parse(body)?;
    if resp.get("msg").and_then(Value::as_str) == Some(SIGNUP_CREATED_MSG) {
        return Ok(());
    }
    Err(AuthError::SignupRejected(field_text(&resp, "msg")))
}

/// Decode a `private` response.
///
/// # Errors
///
/// `Status` on non-2xx (401 for a bad token), `MalformedBody` when the body is
/// not a user object with an `email`.
pub fn interpret_private(status: u16, body: &str) -> Result<User, AuthError> {
    check_status(status, body)?;
    parse(body)
}
