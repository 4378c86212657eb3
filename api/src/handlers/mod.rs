//! Response building and error translation

pub mod error_handler;

pub use error_handler::{handle_domain_error, respond, respond_with_data};
