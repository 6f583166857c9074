//! Login credentials

/// A uid / plaintext password pair presented for authentication.
///
/// Lives only for the duration of a validate or attempt call and is never
/// persisted. The `Debug` output redacts the password.
#[derive(Clone)]
pub struct Credentials {
    /// Lookup identifier (email or username)
    pub uid: String,
    /// Plaintext password
    pub password: String,
}

impl Credentials {
    /// Create credentials from a uid and plaintext password
    pub fn new(uid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("uid", &self.uid)
            .field("password", &"<redacted>")
            .finish()
    }
}
