//! Vigil Types - Shared domain types
//!
//! This crate contains the domain types shared by the vigil crates:
//! - User identity
//! - Login credentials

pub mod credentials;
pub mod user;

pub use credentials::*;
pub use user::*;
