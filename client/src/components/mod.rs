//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page chrome rendered around every route.

pub mod footer;
pub mod navbar;
