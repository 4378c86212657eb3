//! Shared utilities and common types for the TokenGate server
//!
//! This crate provides functionality used across all server members:
//! - Configuration types loaded from environment variables
//! - The uniform API response envelope

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, JwtConfig, ServerConfig};
pub use types::ApiResponse;
