//! User-facing alert text for failed flows.
//!
//! A dead network and a wrong password read the same to the user; only the
//! flow (login vs. signup) and the local form checks pick the message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use crate::error::AuthError;

pub const REQUIRED_FIELDS: &str = "Email and password are required.";
pub const LOGIN_NO_TOKEN: &str = "Authentication error.";
pub const LOGIN_FAILED: &str = "User not registered.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";
pub const SIGNUP_REJECTED: &str = "Could not create user.";
pub const SIGNUP_FAILED: &str = "There was a problem signing up. Please try again.";

#[must_use]
pub fn login_failure(err: &AuthError) -> &'static str {
    match err {
        AuthError::EmptyField(_) => REQUIRED_FIELDS,
        AuthError::MissingToken => LOGIN_NO_TOKEN,
        _ => LOGIN_FAILED,
    }
}

#[must_use]
pub fn signup_failure(err: &AuthError) -> &'static str {
    match err {
        AuthError::PasswordMismatch => PASSWORD_MISMATCH,
        AuthError::EmptyField(_) => REQUIRED_FIELDS,
        AuthError::SignupRejected(_) => SIGNUP_REJECTED,
        _ => SIGNUP_FAILED,
    }
}
