//! Redis-backed credential store
//!
//! Usernames are stored under the `credential:` prefix with the secret
//! as the value. Registration uses the store's conditional set, so the
//! duplicate check and the write are one atomic operation and
//! concurrent registrations of the same username cannot both win.

use async_trait::async_trait;
use tracing::debug;

use tg_core::errors::DomainResult;
use tg_core::repositories::CredentialRepository;

use crate::cache::RedisClient;

/// Key prefix separating credentials from revocation markers
const CREDENTIAL_KEY_PREFIX: &str = "credential";

/// Credential store over the shared Redis instance
#[derive(Clone)]
pub struct RedisCredentialStore {
    redis: RedisClient,
}

impl RedisCredentialStore {
    /// Create a new store over an existing Redis client
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn key(username: &str) -> String {
        format!("{}:{}", CREDENTIAL_KEY_PREFIX, username)
    }
}

#[async_trait]
impl CredentialRepository for RedisCredentialStore {
    async fn insert_if_absent(&self, username: &str, secret: &str) -> DomainResult<bool> {
        let stored = self
            .redis
            .set_if_absent(&Self::key(username), secret)
            .await?;

        debug!(username, stored, "conditional credential insert");
        Ok(stored)
    }

    async fn verify(&self, username: &str, secret: &str) -> DomainResult<bool> {
        match self.redis.get(&Self::key(username)).await? {
            Some(stored) => Ok(stored == secret),
            None => Ok(false),
        }
    }
}
