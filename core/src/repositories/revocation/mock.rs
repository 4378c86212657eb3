//! Mock implementation of RevocationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainResult;

use super::r#trait::RevocationRepository;

/// In-memory revocation registry for testing
///
/// Stores each marker's expiry instant and treats lapsed entries as
/// absent, mirroring the TTL behavior of the production store.
#[derive(Clone)]
pub struct MockRevocationRepository {
    entries: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
}

impl MockRevocationRepository {
    /// Create a new mock registry
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seconds until a marker lapses, if one is present and live
    pub async fn entry_ttl(&self, token: &str) -> Option<i64> {
        let entries = self.entries.read().await;
        entries
            .get(token)
            .map(|expires_at| (*expires_at - Utc::now()).num_seconds())
            .filter(|remaining| *remaining > 0)
    }
}

impl Default for MockRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(
            token.to_string(),
            Utc::now() + Duration::seconds(ttl_seconds as i64),
        );
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> DomainResult<bool> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(token)
            .map(|expires_at| *expires_at > Utc::now())
            .unwrap_or(false))
    }
}
