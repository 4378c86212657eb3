//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis host
    pub host: String,

    /// Redis port
    pub port: u16,

    /// Redis database number (0-15)
    #[serde(default)]
    pub database: u8,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 6379,
            database: 0,
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration with host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    ///
    /// Reads `REDIS_HOST` and `REDIS_PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("REDIS_HOST").unwrap_or(defaults.host);
        let port = std::env::var("REDIS_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        Self {
            host,
            port,
            database: defaults.database,
        }
    }

    /// Set the database number
    pub fn with_database(mut self, db: u8) -> Self {
        self.database = db.min(15);
        self
    }

    /// Build the Redis connection URL
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url(), "redis://127.0.0.1:6379/0");
    }

    #[test]
    fn test_cache_config_with_database() {
        let config = CacheConfig::new("cache", 6380).with_database(2);
        assert_eq!(config.url(), "redis://cache:6380/2");
    }
}
