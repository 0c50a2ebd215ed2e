//! Request guards

pub mod admin_guard;

pub use admin_guard::{extract_token, AdminGuard};
