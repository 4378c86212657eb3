//! Cache module for the Redis-backed shared stores
//!
//! This module provides the Redis client plus the credential store and
//! revocation registry built on top of it. Every mutation is a single
//! atomic remote operation; entry expiry is delegated entirely to the
//! store's own TTL mechanism.

pub mod credential_store;
pub mod redis_client;
pub mod revocation_store;

pub use credential_store::RedisCredentialStore;
pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use tg_shared::config::cache::CacheConfig;
