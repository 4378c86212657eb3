//! Token validation endpoint

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::handlers::{handle_domain_error, respond_with_data};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::{authorization_token, AppState};

/// Handler for GET /token/validate
///
/// Reports how many seconds a presented token remains valid. The token
/// travels in the `authorization` header as a bare string.
///
/// # Responses
/// - 200 OK: `data: [{"remaining_validity_seconds": n}]`
/// - 400 Bad Request: `authorization` header missing
/// - 401 Unauthorized: token revoked or expired
/// - 500 Internal Server Error: undecodable token or store failure
pub async fn validate_token<C, R>(
    req: HttpRequest,
    state: web::Data<AppState<C, R>>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    let token = match authorization_token(&req) {
        Some(token) => token,
        None => {
            let error = ValidationError::RequiredField {
                field: "token".to_string(),
            };
            return handle_domain_error(None, "validating", error.into());
        }
    };

    match state.lifecycle.validate(&token).await {
        Ok(remaining) => respond_with_data(
            StatusCode::OK,
            "Token validity checked successfully",
            vec![json!({"remaining_validity_seconds": remaining})],
        ),
        Err(error) => handle_domain_error(None, "validating", error),
    }
}
