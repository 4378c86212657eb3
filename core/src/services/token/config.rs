//! Configuration for the token service

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::errors::DomainError;
use tg_shared::config::auth::JwtConfig;

/// Configuration for the token codec and lifecycle service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret, shared by access and refresh tokens
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration, parsing the algorithm name
    ///
    /// # Returns
    /// * `Ok(TokenServiceConfig)` - Parsed configuration
    /// * `Err(DomainError)` - The algorithm name is not a known JWT algorithm
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| {
            DomainError::Internal {
                message: format!("Unsupported JWT algorithm: {}", config.algorithm),
            }
        })?;

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            access_token_expiry_minutes: config.access_token_expire_minutes,
            refresh_token_expiry_days: config.refresh_token_expire_days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_jwt_config_parses_algorithm() {
        let jwt = JwtConfig::new("secret").with_access_expiry_minutes(5);
        let config = TokenServiceConfig::from_jwt_config(&jwt).unwrap();

        assert_eq!(config.algorithm, Algorithm::HS256);
        assert_eq!(config.access_token_expiry_minutes, 5);
    }

    #[test]
    fn test_from_jwt_config_rejects_unknown_algorithm() {
        let jwt = JwtConfig {
            algorithm: "HS257".to_string(),
            ..JwtConfig::default()
        };

        assert!(TokenServiceConfig::from_jwt_config(&jwt).is_err());
    }
}
