//! Shared test harness: memory-backed provider and stores plus a seeded user

use std::sync::Arc;

use uuid::Uuid;

use vigil_auth_core::{GuardConfig, SessionGuard};
use vigil_store::{
    CreateUser, MemoryClientTokenStore, MemorySessionStore, MemoryUserProvider, UserRow,
};

pub struct Harness {
    pub provider: Arc<MemoryUserProvider>,
    pub session: Arc<MemorySessionStore>,
    pub tokens: Arc<MemoryClientTokenStore>,
    pub config: GuardConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            provider: Arc::new(MemoryUserProvider::new()),
            session: Arc::new(MemorySessionStore::new()),
            tokens: Arc::new(MemoryClientTokenStore::new()),
            config: GuardConfig::default(),
        }
    }

    /// Seed a user with a hashed password
    pub fn seed_user(&self, email: &str, password: &str) -> UserRow {
        self.provider
            .create(CreateUser {
                id: Uuid::new_v4(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .expect("hashing test input cannot fail")
    }

    /// A fresh guard over the shared stores, as a new request would get
    pub fn guard(&self) -> SessionGuard<MemoryUserProvider, MemorySessionStore, MemoryClientTokenStore>
    {
        SessionGuard::new(
            self.config.clone(),
            Arc::clone(&self.provider),
            Arc::clone(&self.session),
            Arc::clone(&self.tokens),
        )
    }
}
