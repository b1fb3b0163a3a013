//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and hands user actions to the shared
//! `authflow::Session`; navigation is left to the navbar's effects.

pub mod home;
pub mod login;
pub mod private;
pub mod signup;
