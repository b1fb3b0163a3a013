//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the REST calls against the auth API; request and response
//! shapes are shared with the CLI through `authflow`.

pub mod api;
