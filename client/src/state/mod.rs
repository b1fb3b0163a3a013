//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only auth state is shared across routes; form fields and the fetched user
//! stay local to the page that owns them.

pub mod auth;
