//! Domain layer: entities owned by the token lifecycle

pub mod entities;

pub use entities::*;
