use super::*;

#[test]
fn url_joins_base_and_endpoint() {
    let api = HttpAuthApi::new("https://api.example.com/");
    assert_eq!(api.url(Endpoint::Login), "https://api.example.com/login");
    assert_eq!(api.url(Endpoint::Signup), "https://api.example.com/signup");
    assert_eq!(api.url(Endpoint::Private), "https://api.example.com/private");
}

#[test]
fn from_env_uses_backend_url() {
    assert_eq!(HttpAuthApi::from_env(), HttpAuthApi::new(backend_url()));
    assert!(!backend_url().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_fail_as_network_errors_off_browser() {
    let api = HttpAuthApi::new(DEFAULT_BACKEND_URL);
    let creds = Credentials::new("a@b.com", "pw");
    let token = Token::new("t").expect("token");

    let login = futures::executor::block_on(api.login(&creds));
    assert!(matches!(login, Err(AuthError::Network(_))));
    let signup = futures::executor::block_on(api.signup(&creds));
    assert!(matches!(signup, Err(AuthError::Network(_))));
    let private = futures::executor::block_on(api.fetch_private(&token));
    assert!(matches!(private, Err(AuthError::Network(_))));
}
