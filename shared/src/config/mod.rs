//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `cache` - Redis connection configuration
//! - `server` - HTTP server configuration

pub mod auth;
pub mod cache;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load the complete configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            cache: CacheConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}
