//! JWT encoding and decoding
//!
//! The codec is the sole authority for a token's subject and expiry.
//! Access and refresh tokens are signed with the same key and differ
//! only in how far their expiry lies in the future.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Encoder/decoder for the service's signed claims
pub struct TokenCodec {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from the token service configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        // Expiry must flip exactly at `exp`, not a leeway window later.
        validation.leeway = 0;
        validation.validate_exp = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Sign an access token for `subject` using the configured short expiry window
    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        let expires_at = Utc::now() + Duration::minutes(self.config.access_token_expiry_minutes);
        self.encode(&Claims::new(subject, expires_at))
    }

    /// Sign a refresh token for `subject` using the configured long expiry window
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        let expires_at = Utc::now() + Duration::days(self.config.refresh_token_expiry_days);
        self.encode(&Claims::new(subject, expires_at))
    }

    /// Sign an access + refresh pair bound to the same subject
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair::new(
            self.issue_access_token(subject)?,
            self.issue_refresh_token(subject)?,
        ))
    }

    /// Encode claims into a signed token string
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|_| TokenError::GenerationFailed)
    }

    /// Decode and verify a token, returning its claims
    ///
    /// Expiry is distinguished from other failures because several
    /// callers treat it as a normal state rather than a hard error.
    ///
    /// # Returns
    /// * `Ok(Claims)` - Signature valid, expiry in the future
    /// * `Err(TokenError::Expired)` - Well-formed and signed, but past expiry
    /// * `Err(TokenError::InvalidSignature)` - Signature check failed
    /// * `Err(TokenError::Malformed)` - Any other decode failure
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }

    /// Whole seconds until the token's claimed expiry
    ///
    /// A well-formed, correctly signed token past its expiry maps to
    /// `TokenError::Expired`; other decode failures keep their own kind
    /// so callers can conflate or split them as their contract requires.
    pub fn remaining_validity(&self, token: &str) -> Result<i64, TokenError> {
        let claims = self.decode(token)?;
        let remaining = claims.remaining_seconds(Utc::now());

        if remaining > 0 {
            Ok(remaining)
        } else {
            Err(TokenError::Expired)
        }
    }
}
