//! Remember-token minting

use std::time::Duration;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// A freshly minted remember token and its lifetime
#[derive(Debug, Clone)]
pub struct RememberToken {
    /// URL-safe opaque value handed to the client token store
    pub value: String,
    /// Lifetime used as the client-held expiry
    pub ttl: Duration,
}

impl RememberToken {
    /// Mint a token from `bytes` of OS randomness
    pub fn mint(bytes: usize, ttl: Duration) -> Self {
        Self {
            value: random_token(bytes),
            ttl,
        }
    }
}

/// Generate a URL-safe random token from `bytes` of OS randomness
pub fn random_token(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(&buf)
}
