//! Common type definitions shared across server members

pub mod response;

pub use response::ApiResponse;
