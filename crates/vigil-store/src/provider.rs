//! User provider contract
//!
//! The guard depends only on this interface; backing stores (in-memory,
//! Postgres, or host-supplied) are added by implementing it.

use async_trait::async_trait;

use vigil_types::UserId;

use crate::error::StoreResult;
use crate::models::UserRow;

/// The facts the guard needs from a user record.
pub trait Identity: Clone + Send + Sync + 'static {
    /// Primary-key value, absent until the record has been persisted.
    fn id(&self) -> Option<UserId>;
}

impl Identity for UserRow {
    fn id(&self) -> Option<UserId> {
        Some(UserId(self.id))
    }
}

/// User lookup and verification contract
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Concrete user record resolved by this provider
    type User: Identity;

    /// Find a user by lookup identifier (email or username)
    async fn find_by_uid(&self, uid: &str) -> StoreResult<Option<Self::User>>;

    /// Find a user by primary key
    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<Self::User>>;

    /// Find the user holding the given remember token
    async fn find_by_remember_token(&self, token: &str) -> StoreResult<Option<Self::User>>;

    /// Verify a plaintext password against the user's stored hash
    async fn verify_password(&self, user: &Self::User, password: &str) -> StoreResult<bool>;

    /// Persist a new remember token for the user
    async fn save_remember_token(&self, user: &Self::User, token: &str) -> StoreResult<()>;
}
