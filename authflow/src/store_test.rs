use super::*;

fn token(raw: &str) -> Token {
    Token::new(raw).expect("non-empty token")
}

#[test]
fn token_key_is_fixed() {
    assert_eq!(TOKEN_KEY, "jwt_token");
}

#[test]
fn memory_store_starts_empty() {
    let store = MemoryTokenStore::new();
    assert!(store.get().is_none());
    assert!(!store.has_token());
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryTokenStore::new();
    store.set(&token("first"));
    store.set(&token("second"));
    assert_eq!(store.get(), Some(token("second")));
}

#[test]
fn memory_store_clear_removes_token_and_is_idempotent() {
    let store = MemoryTokenStore::with_token(token("t"));
    assert!(store.has_token());
    store.clear();
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryTokenStore::new();
    let view = store.clone();
    store.set(&token("shared"));
    assert_eq!(view.get(), Some(token("shared")));
}
