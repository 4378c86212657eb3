//! Authenticated ping-pong probe

use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::handlers::{handle_domain_error, respond, respond_with_data};

use tg_core::errors::ValidationError;
use tg_core::repositories::{CredentialRepository, RevocationRepository};

use super::{authorization_token, AppState};

/// Handler for GET /ping-pong
///
/// Runs the same token checks as validation and answers with a pong.
/// Unlike validation, a missing `authorization` header is 401 here.
///
/// # Responses
/// - 200 OK: `data: [{"ping": "pong"}]`
/// - 401 Unauthorized: token missing, revoked or expired
/// - 500 Internal Server Error: undecodable token or store failure
pub async fn ping_pong<C, R>(req: HttpRequest, state: web::Data<AppState<C, R>>) -> HttpResponse
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    let token = match authorization_token(&req) {
        Some(token) => token,
        None => {
            // Same message as validation, but this endpoint answers 401
            let error = ValidationError::RequiredField {
                field: "token".to_string(),
            };
            log::warn!("Rejected while processing ping-pong: {}", error);
            return respond(StatusCode::UNAUTHORIZED, error.to_string());
        }
    };

    match state.lifecycle.validate(&token).await {
        Ok(_) => respond_with_data(
            StatusCode::OK,
            "Successfully played ping-pong",
            vec![json!({"ping": "pong"})],
        ),
        Err(error) => handle_domain_error(None, "processing ping-pong", error),
    }
}
