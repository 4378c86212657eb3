//! # TokenGate API
//!
//! HTTP transport layer for the token lifecycle service. Translates
//! transport-level requests into lifecycle operations and lifecycle
//! outcomes back into the uniform response envelope.

pub mod dto;
pub mod handlers;
pub mod routes;
