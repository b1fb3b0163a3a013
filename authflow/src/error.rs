//! Error type for every auth-flow failure.
//!
//! ERROR HANDLING
//! ==============
//! Variants keep enough detail for logs. What the user sees is decided by
//! [`crate::notice`], which collapses network and credential failures into one
//! message per flow.

/// Failure from a form check, the token store, or an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status. `message` is the body's
    /// `msg` field when one was sent.
    #[error("http status {status}{}", detail(.message.as_deref()))]
    Status { status: u16, message: Option<String> },
    /// The body was not the JSON shape the endpoint promises.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    /// A login response, or the token store, had no token.
    #[error("no token available")]
    MissingToken,
    /// Signup returned 2xx without the success message.
    #[error("signup rejected{}", detail(.0.as_deref()))]
    SignupRejected(Option<String>),
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
    /// A required form field was blank.
    #[error("the {0} field is required")]
    EmptyField(&'static str),
}

fn detail(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}
