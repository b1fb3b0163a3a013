//! Browser-free authentication flow shared by every gatehouse front end.
//!
//! This crate owns the data model, the token-store and API seams, and the
//! small state machine that decides whether the current visitor is logged in.
//! The Leptos `client` plugs in `localStorage` + `gloo-net`, the `cli` plugs in
//! a file + `reqwest`; everything else lives here so it can be tested without
//! a browser or a network.
//!
//! SYSTEM CONTEXT
//! ==============
//! The REST API is an external collaborator exposing `POST login`,
//! `POST signup` and `GET private`. Authentication state is derived purely
//! from token presence; the server is the only party that validates tokens.

pub mod api;
pub mod error;
pub mod notice;
pub mod observer;
pub mod route;
pub mod session;
pub mod store;
pub mod types;

pub use api::{AuthApi, Endpoint, endpoint_url};
pub use error::AuthError;
pub use observer::{AuthEvent, AuthObserver, AuthState};
pub use route::Route;
pub use session::{Outcome, PrivateView, Session};
pub use store::{MemoryTokenStore, TOKEN_KEY, TokenStore};
pub use types::{Credentials, SignupForm, Token, User};
