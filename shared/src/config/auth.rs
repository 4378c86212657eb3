//! JWT signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// A single secret and algorithm sign both access and refresh tokens;
/// the two kinds differ only in their expiry windows.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Algorithm name for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token expiry time in minutes
    pub access_token_expire_minutes: i64,

    /// Refresh token expiry time in days
    pub refresh_token_expire_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            algorithm: default_algorithm(),
            access_token_expire_minutes: 15,
            refresh_token_expire_days: 7,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expire_days = days;
        self
    }

    /// Create from environment variables
    ///
    /// Reads `SECRET_KEY`, `ALGORITHM`, `ACCESS_TOKEN_EXPIRE_MINUTES`
    /// and `REFRESH_TOKEN_EXPIRE_DAYS`, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let secret = std::env::var("SECRET_KEY").unwrap_or(defaults.secret);
        let algorithm = std::env::var("ALGORITHM").unwrap_or(defaults.algorithm);
        let access_token_expire_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expire_minutes);
        let refresh_token_expire_days = std::env::var("REFRESH_TOKEN_EXPIRE_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.refresh_token_expire_days);

        Self {
            secret,
            algorithm,
            access_token_expire_minutes,
            refresh_token_expire_days,
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
