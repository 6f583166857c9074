//! Row models
//!
//! These types map directly to database rows using SQLx's FromRow derive;
//! the in-memory provider uses the same shape.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use vigil_types::UserId;

/// User row as stored by the shipped providers.
///
/// `remember_token` holds a digest of the token, never the raw value.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub remember_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}

/// Create user input
#[derive(Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    /// Plaintext password, hashed on create
    pub password: String,
}

impl CreateUser {
    /// Create input with a fresh random ID
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
