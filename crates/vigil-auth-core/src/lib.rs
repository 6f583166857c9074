//! Vigil Auth Core - session authentication guard
//!
//! The per-request state machine deciding "is this request authenticated,
//! and as whom": credential validation, login/logout side effects, and
//! remember-token re-authentication, composed over the provider and
//! request-state contracts from `vigil-store`.
//!
//! # Example
//!
//! ```rust,ignore
//! use vigil_auth_core::{GuardConfig, SessionGuard};
//! use vigil_types::Credentials;
//!
//! let mut guard = SessionGuard::new(GuardConfig::default(), provider, session, tokens);
//! guard.remember(true);
//! let user = guard.attempt(&Credentials::new("user@example.com", "s3cret")).await?;
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod remember;
pub mod token;

pub use config::*;
pub use error::*;
pub use guard::*;
pub use remember::*;
pub use token::*;
