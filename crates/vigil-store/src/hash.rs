//! Password hashing and token digests
//!
//! Providers store argon2 PHC strings for passwords and SHA-256 digests for
//! remember tokens. The raw token value only ever lives in the client-held
//! store; lookups digest the presented value first.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use sha2::{Digest, Sha256};

use crate::error::{StoreError, StoreResult};

/// Hash a plaintext password into a PHC string
pub fn hash_password(password: &str) -> StoreResult<String> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| StoreError::PasswordHash(e.to_string()))?;

    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(phc)
}

/// Verify a plaintext password against a stored PHC string.
///
/// A stored hash that fails to parse verifies as false rather than erroring.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Digest a token for storage
pub fn digest_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_roundtrip() {
        let phc = hash_password("correct-pw").unwrap();
        assert!(verify_password(&phc, "correct-pw"));
        assert!(!verify_password(&phc, "wrong-pw"));
    }

    #[test]
    fn test_distinct_salts() {
        let a = hash_password("same-password").unwrap();
        let b = hash_password("same-password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_garbage_hash_verifies_false() {
        assert!(!verify_password("not-a-phc-string", "anything"));
        assert!(!verify_password("", "anything"));
    }

    #[test]
    fn test_digest_token_deterministic() {
        let a = digest_token("some-token-value");
        let b = digest_token("some-token-value");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64); // SHA-256 = 32 bytes = 64 hex chars

        let c = digest_token("different-token");
        assert_ne!(a, c);
    }
}
