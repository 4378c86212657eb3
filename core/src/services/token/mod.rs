//! Token service module for JWT lifecycle management
//!
//! This module handles all token-related operations including:
//! - JWT encoding and decoding (the codec)
//! - Credential registration and authentication
//! - Token issuance, renewal, revocation and validation

mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::TokenLifecycleService;
