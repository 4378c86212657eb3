//! Domain error to HTTP translation
//!
//! The single point where `DomainError` becomes a transport response.
//! Malformed tokens and bad signatures deliberately share the generic
//! 500 with store failures and unexpected faults; splitting them into a
//! client error later only touches this table, not the lifecycle logic.

use actix_web::{http::StatusCode, HttpResponse};

use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_shared::types::response::ApiResponse;

/// Build a response carrying only the envelope message and status code
pub fn respond(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::message(status.as_u16(), message))
}

/// Build a success response with a payload
pub fn respond_with_data(
    status: StatusCode,
    message: impl Into<String>,
    data: Vec<serde_json::Value>,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::with_data(status.as_u16(), message, data))
}

/// Map a lifecycle error onto the transport contract
///
/// # Arguments
/// * `trace_id` - Trace id from the request envelope, if the endpoint has one
/// * `operation` - Short verb phrase for log lines and generic messages,
///   e.g. "creating the token"
/// * `error` - The lifecycle outcome to translate
pub fn handle_domain_error(
    trace_id: Option<&str>,
    operation: &str,
    error: DomainError,
) -> HttpResponse {
    let trace_id = trace_id.unwrap_or("-");

    let (status, message) = match &error {
        DomainError::Auth(AuthError::UserAlreadyExists) => {
            (StatusCode::BAD_REQUEST, "User already exists".to_string())
        }
        DomainError::Auth(AuthError::InvalidCredentials) => (
            StatusCode::BAD_REQUEST,
            format!("Invalid credentials received. Error while {}", operation),
        ),
        DomainError::Token(TokenError::AlreadyExpired) => {
            (StatusCode::BAD_REQUEST, "Token already expired".to_string())
        }
        DomainError::Token(TokenError::RefreshTokenExpired) => {
            (StatusCode::UNAUTHORIZED, "Refresh token expired".to_string())
        }
        DomainError::Token(TokenError::Expired) => {
            (StatusCode::UNAUTHORIZED, "Token has expired".to_string())
        }
        DomainError::Token(TokenError::Revoked) => (
            StatusCode::UNAUTHORIZED,
            "Token has been revoked".to_string(),
        ),
        DomainError::ValidationErr(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        // Malformed tokens, bad signatures, store failures and anything
        // unexpected collapse into one generic internal error.
        other => {
            log::error!(
                "Error while {}: {:?} traceId={}",
                operation,
                other,
                trace_id
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error while {}", operation),
            )
        }
    };

    if status != StatusCode::INTERNAL_SERVER_ERROR {
        log::warn!(
            "Rejected while {}: {} traceId={}",
            operation,
            message,
            trace_id
        );
    }

    respond(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tg_core::errors::ValidationError;

    #[test]
    fn test_revoked_maps_to_unauthorized() {
        let response =
            handle_domain_error(Some("t-1"), "validating", TokenError::Revoked.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_already_expired_maps_to_bad_request() {
        let response =
            handle_domain_error(Some("t-1"), "revoking the token", TokenError::AlreadyExpired.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_token_shares_the_generic_internal_error() {
        let response =
            handle_domain_error(None, "validating", TokenError::Malformed.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_field_maps_to_bad_request_with_its_message() {
        let error = ValidationError::RequiredField {
            field: "token".to_string(),
        };
        let response = handle_domain_error(None, "validating", error.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_payload_maps_to_bad_request() {
        let error = ValidationError::InvalidData {
            reason: "Error while creating the user: missing field `password`".to_string(),
        };
        let response = handle_domain_error(Some("t-3"), "creating the user", error.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failure_is_internal() {
        let error = DomainError::Store {
            message: "connection lost".to_string(),
        };
        let response = handle_domain_error(Some("t-2"), "creating the user", error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
