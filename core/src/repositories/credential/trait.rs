//! Credential repository trait defining the interface for credential storage.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Repository trait for username/password credential persistence
///
/// Implementations map a unique username to its stored secret. The raw
/// secret is never read back through this interface; verification takes
/// a candidate secret so a hashing backend can be swapped in without
/// touching callers.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Store a credential if the username is not already taken
    ///
    /// Must be a single atomic conditional set on the backing store,
    /// not an existence check followed by a write.
    ///
    /// # Arguments
    /// * `username` - The unique username key
    /// * `secret` - The secret to store
    ///
    /// # Returns
    /// * `Ok(true)` - Credential stored
    /// * `Ok(false)` - Username already taken
    /// * `Err(DomainError)` - Store failure
    async fn insert_if_absent(&self, username: &str, secret: &str) -> DomainResult<bool>;

    /// Check a presented secret against the stored credential
    ///
    /// # Arguments
    /// * `username` - The username to look up
    /// * `secret` - The candidate secret
    ///
    /// # Returns
    /// * `Ok(true)` - Username exists and the secret matches exactly
    /// * `Ok(false)` - Unknown username or mismatched secret
    /// * `Err(DomainError)` - Store failure
    async fn verify(&self, username: &str, secret: &str) -> DomainResult<bool>;
}
