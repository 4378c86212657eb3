//! Token lifecycle endpoints
//!
//! This module contains all lifecycle-related endpoints:
//! - User registration
//! - Token issuance (access + refresh pair)
//! - Token revocation and renewal
//! - Token validation and the authenticated ping-pong probe

pub mod create_token;
pub mod create_user;
pub mod ping_pong;
pub mod renew;
pub mod revoke;
pub mod validate;

use std::sync::Arc;

use actix_web::{web, HttpRequest};

use tg_core::repositories::{CredentialRepository, RevocationRepository};
use tg_core::services::token::TokenLifecycleService;

/// Application state holding the shared lifecycle service
pub struct AppState<C, R>
where
    C: CredentialRepository,
    R: RevocationRepository,
{
    pub lifecycle: Arc<TokenLifecycleService<C, R>>,
}

/// Register the lifecycle routes on a service config
pub fn configure<C, R>(cfg: &mut web::ServiceConfig)
where
    C: CredentialRepository + 'static,
    R: RevocationRepository + 'static,
{
    cfg.route("/user", web::post().to(create_user::create_user::<C, R>))
        .route("/token", web::post().to(create_token::create_token::<C, R>))
        .route(
            "/token/revoke",
            web::post().to(revoke::revoke_token::<C, R>),
        )
        .route("/token/renew", web::post().to(renew::renew_token::<C, R>))
        .route(
            "/token/validate",
            web::get().to(validate::validate_token::<C, R>),
        )
        .route("/ping-pong", web::get().to(ping_pong::ping_pong::<C, R>));
}

/// Extract the raw token from the `authorization` header
///
/// The header value is the bare token string; no scheme prefix is
/// expected or stripped.
pub(crate) fn authorization_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
