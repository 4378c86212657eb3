//! Credential entity

/// A stored username/password credential
///
/// Created on registration and never updated or deleted afterwards.
/// Callers never read the stored secret back; they present a candidate
/// through [`matches`](Credential::matches) so a hashing backend can be
/// substituted without changing the call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Unique username, the storage key
    pub username: String,
    /// The stored secret
    secret: String,
}

impl Credential {
    /// Create a new credential
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Check a presented secret against the stored one (exact equality)
    pub fn matches(&self, secret: &str) -> bool {
        self.secret == secret
    }
}
