//! Wire and form types for the auth flow.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AuthError;

/// Email + password pair submitted by the login and signup forms.
///
/// Serializes to the exact request body the API expects.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }

    /// Both fields are required; whitespace-only counts as empty.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() {
            return Err(AuthError::EmptyField("email"));
        }
        if self.password.trim().is_empty() {
            return Err(AuthError::EmptyField("password"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signup form state: credentials plus the confirmation field.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    #[must_use]
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Validate the form and extract the credentials to submit.
    ///
    /// Mismatch is checked before emptiness so the user sees the
    /// confirmation problem first.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordMismatch`] or [`AuthError::EmptyField`].
    pub fn credentials(&self) -> Result<Credentials, AuthError> {
        if !self.passwords_match() {
            return Err(AuthError::PasswordMismatch);
        }
        let creds = Credentials::new(self.email.clone(), self.password.clone());
        creds.validate()?;
        Ok(creds)
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("email", &self.email)
            .field("passwords_match", &self.passwords_match())
            .finish_non_exhaustive()
    }
}

/// Opaque bearer credential. Never empty.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string. Empty (or whitespace-only) input is treated as
    /// "no token".
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for Token {
    type Error = AuthError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(AuthError::MissingToken)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// User returned by `GET private`. Only `email` is required; any other fields
/// the server sends are kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into(), extra: Map::new() }
    }
}
