//! Token revocation endpoint

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::dto::{ApiRequest, TokenRequest};
use crate::handlers::{handle_domain_error, respond};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::AppState;

/// Handler for POST /token/revoke
///
/// Marks a token revoked for the remainder of its natural lifetime.
///
/// # Request Body
///
/// ```json
/// {
///     "traceId": "string",
///     "data": {"token": "string"}
/// }
/// ```
///
/// # Responses
/// - 200 OK: revocation marker stored
/// - 400 Bad Request: token already expired, or malformed `data` payload
/// - 500 Internal Server Error: undecodable token or store failure
pub async fn revoke_token<C, R>(
    state: web::Data<AppState<C, R>>,
    request: web::Json<ApiRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    let revoke: TokenRequest = match request.parse_data() {
        Ok(revoke) => revoke,
        Err(e) => {
            let error = ValidationError::InvalidData {
                reason: format!("Error while revoking the token: {}", e),
            };
            return handle_domain_error(Some(&request.trace_id), "revoking the token", error.into());
        }
    };

    match state.lifecycle.revoke(&revoke.token).await {
        Ok(()) => respond(StatusCode::OK, "Token revoked successfully"),
        Err(error) => handle_domain_error(Some(&request.trace_id), "revoking the token", error),
    }
}
