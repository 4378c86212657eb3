//! Data transfer objects for the HTTP surface

pub mod request;

pub use request::{ApiRequest, TokenRequest, UserAuthRequest};
