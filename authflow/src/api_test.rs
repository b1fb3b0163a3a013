use super::*;

// =============================================================
// endpoint_url
// =============================================================

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("https://api.test/", Endpoint::Login), "https://api.test/login");
    assert_eq!(endpoint_url("https://api.test", Endpoint::Signup), "https://api.test/signup");
    assert_eq!(endpoint_url("https://api.test//", Endpoint::Private), "https://api.test/private");
}

#[test]
fn endpoint_url_with_empty_base_is_root_relative() {
    assert_eq!(endpoint_url("", Endpoint::Login), "/login");
}

// =============================================================
// interpret_login
// =============================================================

#[test]
fn login_success_yields_token() {
    let token = interpret_login(200, r#"{"msg":"ok","jwt_token":"abc"}"#).expect("token");
    assert_eq!(token.as_str(), "abc");
}

#[test]
fn login_body_without_token_is_missing_token() {
    assert_eq!(interpret_login(200, r#"{"msg":"ok"}"#), Err(AuthError::MissingToken));
    assert_eq!(interpret_login(200, r#"{"jwt_token":""}"#), Err(AuthError::MissingToken));
}

#[test]
fn login_body_with_non_string_token_is_missing_token() {
    assert_eq!(interpret_login(200, r#"{"jwt_token":42}"#), Err(AuthError::MissingToken));
    assert_eq!(interpret_login(200, r#"{"jwt_token":null}"#), Err(AuthError::MissingToken));
    assert_eq!(interpret_login(200, "[]"), Err(AuthError::MissingToken));
}

#[test]
fn login_error_status_keeps_server_message() {
    let err = interpret_login(400, r#"{"msg":"User o password inválidos"}"#).expect_err("status");
    assert_eq!(
        err,
        AuthError::Status { status: 400, message: Some("User o password inválidos".to_owned()) }
    );
}

#[test]
fn login_error_status_with_non_json_body() {
    let err = interpret_login(502, "<html>bad gateway</html>").expect_err("status");
    assert_eq!(err, AuthError::Status { status: 502, message: None });
}

#[test]
fn login_malformed_success_body() {
    let err = interpret_login(200, "not json").expect_err("malformed");
    assert!(matches!(err, AuthError::MalformedBody(_)));
}

// =============================================================
// interpret_signup
// =============================================================

#[test]
fn signup_created_message_is_success() {
    assert_eq!(interpret_signup(201, r#"{"msg":"Nuevo usuario creado"}"#), Ok(()));
}

#[test]
fn signup_other_message_is_rejected() {
    assert_eq!(
        interpret_signup(200, r#"{"msg":"something else"}"#),
        Err(AuthError::SignupRejected(Some("something else".to_owned())))
    );
    assert_eq!(interpret_signup(200, "{}"), Err(AuthError::SignupRejected(None)));
}

#[test]
fn signup_non_string_message_is_rejected_not_malformed() {
    assert_eq!(
        interpret_signup(201, r#"{"msg":5}"#),
        Err(AuthError::SignupRejected(Some("5".to_owned())))
    );
    assert_eq!(interpret_signup(200, "[]"), Err(AuthError::SignupRejected(None)));
}

#[test]
fn signup_existing_user_is_status_error() {
    let err = interpret_signup(400, r#"{"msg":"El usuario ya existe"}"#).expect_err("status");
    assert!(matches!(err, AuthError::Status { status: 400, .. }));
}

// =============================================================
// interpret_private
// =============================================================

#[test]
fn private_success_yields_user() {
    let user = interpret_private(200, r#"{"email":"a@b.com"}"#).expect("user");
    assert_eq!(user.email, "a@b.com");
}

#[test]
fn private_unauthorized_and_server_error() {
    assert!(matches!(interpret_private(401, "{}"), Err(AuthError::Status { status: 401, .. })));
    assert!(matches!(interpret_private(500, ""), Err(AuthError::Status { status: 500, .. })));
}

#[test]
fn private_body_without_email_is_malformed() {
    assert!(matches!(interpret_private(200, r#"{"id":1}"#), Err(AuthError::MalformedBody(_))));
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(201));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(401));
}
