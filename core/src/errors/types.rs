//! Error type definitions for credential and token operations
//!
//! The variants carry the distinctions that matter to callers; the
//! user-facing messages and status codes are assigned at the
//! presentation layer.

use thiserror::Error;

/// Credential-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
///
/// Expiry comes in three flavors because the transport contract treats
/// them differently: an expired token on validation is unauthorized, an
/// expired refresh token on renewal is unauthorized with its own
/// message, and revoking an already expired token is a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,

    #[error("Refresh token expired")]
    RefreshTokenExpired,

    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Token has been revoked")]
    Revoked,

    #[error("Invalid token format")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token generation failed")]
    GenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request, {field} is required.")]
    RequiredField { field: String },

    #[error("Invalid data field received. {reason}")]
    InvalidData { reason: String },
}
