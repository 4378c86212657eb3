//! Business services

pub mod token;

pub use token::{TokenCodec, TokenLifecycleService, TokenServiceConfig};
