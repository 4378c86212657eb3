//! Revocation registry: trait and in-memory mock

mod mock;
mod r#trait;

pub use mock::MockRevocationRepository;
pub use r#trait::RevocationRepository;
