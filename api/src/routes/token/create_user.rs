//! User registration endpoint

use actix_web::{http::StatusCode, web, HttpResponse};

use crate::dto::{ApiRequest, UserAuthRequest};
use crate::handlers::{handle_domain_error, respond};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::AppState;

/// Handler for POST /user
///
/// Creates a credential for a new username.
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
/// - 201 Created: credential stored
/// - 400 Bad Request: duplicate username or malformed `data` payload
/// - 500 Internal Server Error: store failure
pub async fn create_user<C, R>(
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
                reason: format!("Error while creating the user: {}", e),
            };
            return handle_domain_error(Some(&request.trace_id), "creating the user", error.into());
        }
    };

    match state.lifecycle.register(&auth.username, &auth.password).await {
        Ok(()) => respond(
            StatusCode::CREATED,
            format!("User {} stored successfully", auth.username),
        ),
        Err(error) => handle_domain_error(Some(&request.trace_id), "creating the user", error),
    }
}
