//! Credential repository: trait and in-memory mock

mod mock;
mod r#trait;

pub use mock::MockCredentialRepository;
pub use r#trait::CredentialRepository;
