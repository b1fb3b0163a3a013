use super::*;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_serialize_to_request_body() {
    let creds = Credentials::new("a@b.com", "hunter2");
    let json = serde_json::to_value(&creds).expect("serialize");
    assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "hunter2" }));
}

#[test]
fn credentials_debug_hides_password() {
    let creds = Credentials::new("a@b.com", "hunter2");
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn credentials_validate_requires_both_fields() {
    assert_eq!(Credentials::new("a@b.com", "pw").validate(), Ok(()));
    assert_eq!(Credentials::new("  ", "pw").validate(), Err(AuthError::EmptyField("email")));
    assert_eq!(Credentials::new("a@b.com", "").validate(), Err(AuthError::EmptyField("password")));
}

// =============================================================
// SignupForm
// =============================================================

#[test]
fn signup_form_mismatch_is_reported_first() {
    let form = SignupForm::new("", "one", "two");
    assert!(!form.passwords_match());
    assert_eq!(form.credentials(), Err(AuthError::PasswordMismatch));
}

#[test]
fn signup_form_matching_passwords_yield_credentials() {
    let form = SignupForm::new("a@b.com", "pw", "pw");
    assert_eq!(form.credentials(), Ok(Credentials::new("a@b.com", "pw")));
}

#[test]
fn signup_form_blank_email_is_rejected() {
    let form = SignupForm::new(" ", "pw", "pw");
    assert_eq!(form.credentials(), Err(AuthError::EmptyField("email")));
}

// =============================================================
// Token
// =============================================================

#[test]
fn token_rejects_empty_input() {
    assert!(Token::new("").is_none());
    assert!(Token::new("   ").is_none());
    assert_eq!(Token::new("abc").map(|t| t.as_str().to_owned()), Some("abc".to_owned()));
}

#[test]
fn token_bearer_header_value() {
    let token = Token::new("abc.def.ghi").expect("token");
    assert_eq!(token.bearer(), "Bearer abc.def.ghi");
}

#[test]
fn token_debug_is_redacted() {
    let token = Token::new("secret-value").expect("token");
    assert!(!format!("{token:?}").contains("secret-value"));
}

#[test]
fn token_deserialize_rejects_empty_string() {
    assert!(serde_json::from_str::<Token>("\"\"").is_err());
    let token: Token = serde_json::from_str("\"t1\"").expect("token");
    assert_eq!(token.as_str(), "t1");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_keeps_extra_fields() {
    let user: User =
        serde_json::from_str(r#"{"email":"a@b.com","is_active":true}"#).expect("user");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.extra.get("is_active"), Some(&serde_json::Value::Bool(true)));
}

#[test]
fn user_requires_email() {
    assert!(serde_json::from_str::<User>(r#"{"name":"x"}"#).is_err());
}
