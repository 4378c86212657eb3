//! Token renewal endpoint

use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use crate::dto::{ApiRequest, TokenRequest};
use crate::handlers::{handle_domain_error, respond_with_data};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::AppState;

/// Handler for POST /token/renew
///
/// Mints a new access token from a presented refresh token.
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
/// - 200 OK: `data: [{"access_token": "..."}]`
/// - 400 Bad Request: malformed `data` payload
/// - 401 Unauthorized: refresh token expired
/// - 500 Internal Server Error: undecodable token or signing failure
pub async fn renew_token<C, R>(
    state: web::Data<AppState<C, R>>,
    request: web::Json<ApiRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    let renew: TokenRequest = match request.parse_data() {
        Ok(renew) => renew,
        Err(e) => {
            let error = ValidationError::InvalidData {
                reason: format!("Error while renewing the token: {}", e),
            };
            return handle_domain_error(Some(&request.trace_id), "renewing the token", error.into());
        }
    };

    match state.lifecycle.renew(&renew.token).await {
        Ok(access_token) => respond_with_data(
            StatusCode::OK,
            "New access token generated successfully",
            vec![json!({"access_token": access_token})],
        ),
        Err(error) => handle_domain_error(Some(&request.trace_id), "renewing the token", error),
    }
}
