//! Redis-backed revocation registry
//!
//! Revoked tokens are stored under the `revoked:` prefix mapped to a
//! fixed marker value, with a TTL equal to the seconds remaining until
//! the token's own expiry. Redis drops the entry on its own, so a
//! marker never outlives the token it revokes and no cleanup task is
//! needed.

use async_trait::async_trait;
use tracing::debug;

use tg_core::errors::DomainResult;
use tg_core::repositories::RevocationRepository;

use crate::cache::RedisClient;

/// Key prefix separating revocation markers from credentials
const REVOKED_KEY_PREFIX: &str = "revoked";

/// Marker value stored for each revoked token
const REVOKED_MARKER: &str = "revoked";

/// Revocation registry over the shared Redis instance
#[derive(Clone)]
pub struct RedisRevocationStore {
    redis: RedisClient,
}

impl RedisRevocationStore {
    /// Create a new registry over an existing Redis client
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(token: &str) -> String {
        format!("{}:{}", REVOKED_KEY_PREFIX, token)
    }
}

#[async_trait]
impl RevocationRepository for RedisRevocationStore {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> DomainResult<()> {
        self.redis
            .set_with_expiry(&Self::key(token), REVOKED_MARKER, ttl_seconds)
            .await?;

        debug!(ttl_seconds, "revocation marker stored");
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> DomainResult<bool> {
        Ok(self.redis.exists(&Self::key(token)).await?)
    }
}
