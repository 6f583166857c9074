//! In-memory variants
//!
//! DashMap-backed provider and stores for tests and single-process hosts.
//! The token store tracks an expiry instant per entry and treats expired
//! entries as absent.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use vigil_types::UserId;

use crate::error::StoreResult;
use crate::hash;
use crate::models::{CreateUser, UserRow};
use crate::provider::UserProvider;
use crate::state::{ClientTokenStore, SessionStore};

/// In-memory user provider
#[derive(Default, Clone)]
pub struct MemoryUserProvider {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
    /// Token digest -> user id
    by_token: Arc<DashMap<String, Uuid>>,
}

impl MemoryUserProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user row directly
    pub fn insert_user(&self, user: UserRow) {
        self.by_email.insert(user.email.clone(), user.id);
        if let Some(ref digest) = user.remember_token {
            self.by_token.insert(digest.clone(), user.id);
        }
        self.users.insert(user.id, user);
    }

    /// Create a user, hashing the supplied password
    pub fn create(&self, user: CreateUser) -> StoreResult<UserRow> {
        let row = UserRow {
            id: user.id,
            email: user.email,
            password_hash: hash::hash_password(&user.password)?,
            remember_token: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.insert_user(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl UserProvider for MemoryUserProvider {
    type User = UserRow;

    async fn find_by_uid(&self, uid: &str) -> StoreResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(uid)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<UserRow>> {
        Ok(self.users.get(&id.0).map(|r| r.value().clone()))
    }

    async fn find_by_remember_token(&self, token: &str) -> StoreResult<Option<UserRow>> {
        let digest = hash::digest_token(token);
        Ok(self
            .by_token
            .get(&digest)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn verify_password(&self, user: &UserRow, password: &str) -> StoreResult<bool> {
        Ok(hash::verify_password(&user.password_hash, password))
    }

    async fn save_remember_token(&self, user: &UserRow, token: &str) -> StoreResult<()> {
        let digest = hash::digest_token(token);
        let replaced = match self.users.get_mut(&user.id) {
            Some(mut row) => {
                let old = row.remember_token.replace(digest.clone());
                row.updated_at = Utc::now();
                old
            }
            None => None,
        };
        if let Some(old) = replaced {
            self.by_token.remove(&old);
        }
        self.by_token.insert(digest, user.id);
        Ok(())
    }
}

/// In-memory session store
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    values: Arc<DashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).map(|v| v.value().clone()))
    }

    async fn forget(&self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// In-memory client token store
#[derive(Default, Clone)]
pub struct MemoryClientTokenStore {
    values: Arc<DashMap<String, (String, DateTime<Utc>)>>,
}

impl MemoryClientTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expiry instant for a stored token, if one is present
    pub fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.values.get(key).map(|entry| entry.value().1)
    }
}

#[async_trait]
impl ClientTokenStore for MemoryClientTokenStore {
    async fn set(&self, key: &str, value: &str, expires_in: Duration) -> StoreResult<()> {
        let expires_at = chrono::Duration::from_std(expires_in)
            .ok()
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.values
            .insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let expired = match self.values.get(key) {
            Some(entry) => {
                let (value, expires_at) = entry.value();
                if *expires_at > Utc::now() {
                    return Ok(Some(value.clone()));
                }
                true
            }
            None => false,
        };
        if expired {
            self.values.remove(key);
        }
        Ok(None)
    }

    async fn clear(&self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
