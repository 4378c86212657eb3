//! Token issuance endpoint

use actix_web::{http::StatusCode, web, HttpResponse};
use serde_json::json;

use crate::dto::{ApiRequest, UserAuthRequest};
use crate::handlers::{handle_domain_error, respond_with_data};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::AppState;

/// Handler for POST /token
///
/// Authenticates a credential and issues an access + refresh token pair
/// bound to the same subject.
///
/// # Request Body
///
/// ```json
/// {
///     "traceId": "string",
///     "data": {"username": "string", "password": "string"}
/// }
/// ```
///
/// # Responses
/// - 201 Created: `data: [{"access_token": "...", "refresh_token": "..."}]`
/// - 400 Bad Request: invalid credentials or malformed `data` payload
/// - 500 Internal Server Error: store or signing failure
pub async fn create_token<C, R>(
    state: web::Data<AppState<C, R>>,
    request: web::Json<ApiRequest>,
) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    let auth: UserAuthRequest = match request.parse_data() {
        Ok(auth) => auth,
        Err(e) => {
            let error = ValidationError::InvalidData {
                reason: format!("Error while creating the token: {}", e),
            };
            return handle_domain_error(Some(&request.trace_id), "creating the token", error.into());
        }
    };

    match state.lifecycle.issue(&auth.username, &auth.password).await {
        Ok(pair) => respond_with_data(
            StatusCode::CREATED,
            format!("Token created successfully for {}", auth.username),
            vec![json!({
                "access_token": pair.access_token,
                "refresh_token": pair.refresh_token,
            })],
        ),
        Err(error) => handle_domain_error(Some(&request.trace_id), "creating the token", error),
    }
}
