use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use tg_api::routes::token::{self, AppState};
use tg_core::services::token::{TokenLifecycleService, TokenServiceConfig};
use tg_infra::cache::{RedisClient, RedisCredentialStore, RedisRevocationStore};
use tg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TokenGate API server");

    // Load configuration
    let config = AppConfig::from_env();

    let token_config = TokenServiceConfig::from_jwt_config(&config.jwt)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Connect the shared store and build the repository implementations
    let redis = RedisClient::new(&config.cache)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()))?;

    let lifecycle = Arc::new(TokenLifecycleService::new(
        RedisCredentialStore::new(redis.clone()),
        RedisRevocationStore::new(redis),
        token_config,
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                lifecycle: lifecycle.clone(),
            }))
            .wrap(Logger::default())
            // Health check endpoint
            .route("/health", web::get().to(health_check))
            // API v1 routes
            .service(
                web::scope("/api/v1")
                    .configure(token::configure::<RedisCredentialStore, RedisRevocationStore>),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "tokengate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
