//! HTTP route handlers

pub mod token;

pub use token::AppState;
