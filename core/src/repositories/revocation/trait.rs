//! Revocation registry trait defining the interface for revocation markers.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Repository trait for the set of revoked token strings
///
/// Entries expire on their own: the backing store drops a marker after
/// its TTL elapses, which callers set to the seconds remaining until the
/// token's own expiry. A marker therefore never outlives the token it
/// revokes, and no manual deletion path exists.
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Mark a token as revoked
    ///
    /// # Arguments
    /// * `token` - The full token string, used as the marker key
    /// * `ttl_seconds` - Marker lifetime; the store expires the entry after this
    ///
    /// # Returns
    /// * `Ok(())` - Marker stored
    /// * `Err(DomainError)` - Store failure
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> DomainResult<()>;

    /// Presence check for a revocation marker
    ///
    /// `true` means the token is rejected regardless of its remaining
    /// codec-computed validity.
    async fn is_revoked(&self, token: &str) -> DomainResult<bool>;
}
