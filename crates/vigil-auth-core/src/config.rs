//! Guard configuration

use std::time::Duration;

/// Remember-token lifetime used when a request carries no explicit span:
/// five years.
pub const DEFAULT_REMEMBER_TTL: Duration = Duration::from_secs(5 * 365 * 24 * 60 * 60);

/// Remember-token size in random bytes, before URL-safe encoding
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Session guard configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Guard name; the storage keys are derived from it
    pub name: String,
    /// Session-store key holding the authenticated user's primary key
    pub session_key: String,
    /// Client-token-store key holding the remember token
    pub token_key: String,
    /// Lifetime for remember requests without an explicit span
    pub default_remember_ttl: Duration,
    /// Remember-token size in random bytes
    pub token_bytes: usize,
}

impl GuardConfig {
    /// Create a config for a named guard
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            session_key: format!("login_{name}"),
            token_key: format!("remember_{name}"),
            name,
            default_remember_ttl: DEFAULT_REMEMBER_TTL,
            token_bytes: DEFAULT_TOKEN_BYTES,
        }
    }

    /// Override the session-store key
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_key = key.into();
        self
    }

    /// Override the client-token-store key
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.token_key = key.into();
        self
    }

    /// Override the default remember lifetime
    pub fn with_default_remember_ttl(mut self, ttl: Duration) -> Self {
        self.default_remember_ttl = ttl;
        self
    }

    /// Override the remember-token size
    pub fn with_token_bytes(mut self, bytes: usize) -> Self {
        self.token_bytes = bytes;
        self
    }
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new("web")
    }
}
