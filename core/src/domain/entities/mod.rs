//! Domain entities

pub mod credential;
pub mod token;

pub use credential::Credential;
pub use token::{Claims, TokenPair};
