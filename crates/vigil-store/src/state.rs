//! Request-scoped state contracts
//!
//! Two minimal interfaces over whatever a host framework uses for
//! per-request persistence: an opaque key/value session store and a
//! client-held token store whose values carry an expiry. Any HTTP framework
//! can supply adapters.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreResult;

/// Per-request key/value session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a value under a key
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Read a value, if present
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Drop a key
    async fn forget(&self, key: &str) -> StoreResult<()>;
}

/// Client-held token storage (cookie-shaped)
#[async_trait]
pub trait ClientTokenStore: Send + Sync {
    /// Store a token, valid for `expires_in` from now
    async fn set(&self, key: &str, value: &str, expires_in: Duration) -> StoreResult<()>;

    /// Read a token; expired entries read as absent
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Drop a token
    async fn clear(&self, key: &str) -> StoreResult<()>;
}
