//! Mock implementation of CredentialRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::credential::Credential;
use crate::errors::DomainResult;

use super::r#trait::CredentialRepository;

/// In-memory credential repository for testing
#[derive(Clone)]
pub struct MockCredentialRepository {
    credentials: Arc<RwLock<HashMap<String, Credential>>>,
}

impl MockCredentialRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored credentials
    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

impl Default for MockCredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialRepository for MockCredentialRepository {
    async fn insert_if_absent(&self, username: &str, secret: &str) -> DomainResult<bool> {
        let mut credentials = self.credentials.write().await;

        if credentials.contains_key(username) {
            return Ok(false);
        }

        credentials.insert(username.to_string(), Credential::new(username, secret));
        Ok(true)
    }

    async fn verify(&self, username: &str, secret: &str) -> DomainResult<bool> {
        let credentials = self.credentials.read().await;
        Ok(credentials
            .get(username)
            .map(|credential| credential.matches(secret))
            .unwrap_or(false))
    }
}
