use super::*;

#[test]
fn login_network_and_status_failures_share_a_message() {
    let network = AuthError::Network("connection refused".to_owned());
    let status = AuthError::Status { status: 400, message: Some("bad".to_owned()) };
    assert_eq!(login_failure(&network), login_failure(&status));
    assert_eq!(login_failure(&network), LOGIN_FAILED);
}

#[test]
fn login_missing_token_has_its_own_message() {
    assert_eq!(login_failure(&AuthError::MissingToken), LOGIN_NO_TOKEN);
}

#[test]
fn login_blank_field_message() {
    assert_eq!(login_failure(&AuthError::EmptyField("email")), REQUIRED_FIELDS);
}

#[test]
fn signup_messages_by_failure() {
    assert_eq!(signup_failure(&AuthError::PasswordMismatch), PASSWORD_MISMATCH);
    assert_eq!(signup_failure(&AuthError::SignupRejected(None)), SIGNUP_REJECTED);
    assert_eq!(signup_failure(&AuthError::Network("down".to_owned())), SIGNUP_FAILED);
    assert_eq!(
        signup_failure(&AuthError::Status { status: 400, message: None }),
        SIGNUP_FAILED
    );
}
