//! Storage errors

use thiserror::Error;

/// Errors from providers and request-state stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLx error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hash error: {0}")]
    PasswordHash(String),

    /// Backing-store failure reported by an external adapter
    #[error("store error: {0}")]
    Backend(String),
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
