//! Repository interfaces for the externally shared stores
//!
//! The credential store and revocation registry live outside the
//! process (Redis in production). Core code depends only on these
//! traits so tests can substitute the in-memory mocks.

pub mod credential;
pub mod revocation;

pub use credential::{CredentialRepository, MockCredentialRepository};
pub use revocation::{MockRevocationRepository, RevocationRepository};
