//! Redis cache client implementation
//!
//! This module provides a Redis client wrapping a multiplexed async
//! connection with the single-key operations the repositories need:
//! conditional set, get, exists, and set-with-expiry. Connection
//! establishment retries with exponential backoff.
//!
//! Keys are never logged at error level because revocation keys are
//! full token strings.

use std::time::Duration;

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use tg_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Redis client with connection retry on startup
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Create a new Redis client with default retry configuration
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Returns
    /// * `Result<Self, InfrastructureError>` - Redis client or error
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry_config(config, 3, 100).await
    }

    /// Create a new Redis client with custom retry configuration
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    /// * `max_retries` - Maximum number of connection attempts after the first
    /// * `retry_delay_ms` - Base delay between retries (doubles per attempt, capped at 5s)
    pub async fn new_with_retry_config(
        config: &CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!(
            "Creating Redis client for {}:{} (db {})",
            config.host, config.port, config.database
        );

        let client = Client::open(config.url().as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let mut attempts = 0;
        let mut delay = retry_delay_ms;
        let connection = loop {
            match client.get_multiplexed_async_connection().await {
                Ok(connection) => break connection,
                Err(e) if attempts < max_retries => {
                    attempts += 1;
                    warn!(
                        "Redis connection attempt {} failed: {}, retrying in {}ms",
                        attempts, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts + 1,
                        e
                    );
                    return Err(InfrastructureError::Connection(e.to_string()));
                }
            }
        };

        info!("Redis client created successfully");
        Ok(Self { connection })
    }

    /// Set a value only if the key does not exist (SETNX)
    ///
    /// # Returns
    /// * `Ok(true)` - Key was absent, value stored
    /// * `Ok(false)` - Key already present, store untouched
    pub async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
    ) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();

        conn.set_nx::<_, _, bool>(key, value).await.map_err(|e| {
            error!("SETNX failed: {}", e);
            InfrastructureError::Operation(e.to_string())
        })
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Key present
    /// * `Ok(None)` - Key absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();

        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            error!("GET failed: {}", e);
            InfrastructureError::Operation(e.to_string())
        })
    }

    /// Check whether a key exists
    pub async fn exists(&self, key: &str) -> Result<bool, InfrastructureError> {
        let mut conn = self.connection.clone();

        conn.exists::<_, bool>(key).await.map_err(|e| {
            error!("EXISTS failed: {}", e);
            InfrastructureError::Operation(e.to_string())
        })
    }

    /// Set a value with an expiration time (SETEX)
    ///
    /// The store drops the key on its own once `expiry_seconds` elapse.
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key with expiry {}s", expiry_seconds);
        let mut conn = self.connection.clone();

        conn.set_ex::<_, _, ()>(key, value, expiry_seconds)
            .await
            .map_err(|e| {
                error!("SETEX failed: {}", e);
                InfrastructureError::Operation(e.to_string())
            })
    }
}
