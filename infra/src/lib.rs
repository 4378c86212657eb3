//! # TokenGate Infrastructure
//!
//! This crate implements the infrastructure layer for the TokenGate
//! application. It provides the Redis client and the Redis-backed
//! implementations of the core repository traits: the credential store
//! and the revocation registry.

use thiserror::Error;

use tg_core::errors::DomainError;

/// Cache module - Redis client and store implementations
pub mod cache;

/// Errors raised by infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Invalid configuration (bad URL, unparsable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection to the backing store could not be established
    #[error("Cache connection error: {0}")]
    Connection(String),

    /// A store operation failed after the connection was established
    #[error("Cache operation error: {0}")]
    Operation(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Store {
            message: error.to_string(),
        }
    }
}
