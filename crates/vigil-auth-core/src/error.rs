//! Guard errors

use thiserror::Error;

use vigil_store::StoreError;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user resolves for a lookup key
    #[error("no user found where {field} = {value:?}")]
    UserNotFound {
        field: &'static str,
        value: String,
    },

    /// Password verification failed
    #[error("password mismatch")]
    PasswordMismatch,

    /// Login invoked while a user is already authenticated
    #[error("a user is already authenticated on this guard")]
    AlreadyAuthenticated,

    /// Login invoked with a user that has no primary key
    #[error("user record has no primary key")]
    MissingIdentifier,

    /// Provider or request-state failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::PasswordMismatch => 401,
            Self::UserNotFound { .. } => 404,
            Self::AlreadyAuthenticated | Self::MissingIdentifier | Self::Store(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::AlreadyAuthenticated => "ALREADY_AUTHENTICATED",
            Self::MissingIdentifier => "MISSING_IDENTIFIER",
            Self::Store(_) => "STORE_ERROR",
        }
    }
}
