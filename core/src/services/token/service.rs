//! Token lifecycle orchestration
//!
//! A token has no stored state: its effective state is computed on each
//! check from signature and expiry (via the codec) crossed with the
//! revocation registry. The revocation check always runs first, so a
//! revoked-but-unexpired token reports revoked, never valid or expired.

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::entities::token::TokenPair;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{CredentialRepository, RevocationRepository};

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Service orchestrating registration, issuance, renewal, revocation
/// and validation over the injected credential and revocation stores
pub struct TokenLifecycleService<C, R>
where
    C: CredentialRepository,
    R: RevocationRepository,
{
    credentials: C,
    revocations: R,
    codec: TokenCodec,
}

impl<C, R> TokenLifecycleService<C, R>
where
    C: CredentialRepository,
    R: RevocationRepository,
{
    /// Create a new lifecycle service
    ///
    /// # Arguments
    /// * `credentials` - Credential store implementation
    /// * `revocations` - Revocation registry implementation
    /// * `config` - Signing secret, algorithm and expiry windows
    pub fn new(credentials: C, revocations: R, config: TokenServiceConfig) -> Self {
        Self {
            credentials,
            revocations,
            codec: TokenCodec::new(config),
        }
    }

    /// Register a new credential
    ///
    /// # Returns
    /// * `Ok(())` - Credential stored
    /// * `Err(AuthError::UserAlreadyExists)` - Username already registered
    pub async fn register(&self, username: &str, secret: &str) -> DomainResult<()> {
        if !self.credentials.insert_if_absent(username, secret).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        info!(username, "credential stored");
        Ok(())
    }

    /// Authenticate a credential and issue an access + refresh pair
    ///
    /// Both tokens are bound to the same subject with independently
    /// configured expiry windows.
    ///
    /// # Returns
    /// * `Ok(TokenPair)` - Freshly signed pair
    /// * `Err(AuthError::InvalidCredentials)` - Unknown username or wrong secret
    pub async fn issue(&self, username: &str, secret: &str) -> DomainResult<TokenPair> {
        if !self.credentials.verify(username, secret).await? {
            warn!(username, "credential mismatch on token issuance");
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.codec.issue_pair(username)?;
        info!(username, "token pair issued");
        Ok(pair)
    }

    /// Mint a new access token from a presented refresh token
    ///
    /// The codec does not mark token kinds, so any token this service
    /// signed is accepted here, including an access token.
    ///
    /// # Returns
    /// * `Ok(String)` - New access token for the same subject
    /// * `Err(TokenError::RefreshTokenExpired)` - Presented token past expiry
    /// * `Err(TokenError::Malformed | InvalidSignature)` - Decode failure
    pub async fn renew(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.codec.decode(refresh_token).map_err(|e| match e {
            TokenError::Expired => TokenError::RefreshTokenExpired,
            other => other,
        })?;

        let access_token = self.codec.issue_access_token(&claims.sub)?;
        info!(subject = %claims.sub, "access token renewed");
        Ok(access_token)
    }

    /// Mark a token revoked for the remainder of its natural lifetime
    ///
    /// The marker's TTL is the whole seconds left until the token's own
    /// expiry, so the registry entry never outlives the token.
    ///
    /// # Returns
    /// * `Ok(())` - Marker stored
    /// * `Err(TokenError::AlreadyExpired)` - Token past expiry; validation
    ///   already rejects it, so there is nothing to mark
    /// * `Err(TokenError::Malformed | InvalidSignature)` - Decode failure
    pub async fn revoke(&self, token: &str) -> DomainResult<()> {
        let claims = self.codec.decode(token).map_err(|e| match e {
            TokenError::Expired => TokenError::AlreadyExpired,
            other => other,
        })?;

        let remaining = claims.remaining_seconds(Utc::now());
        if remaining <= 0 {
            return Err(TokenError::AlreadyExpired.into());
        }

        self.revocations.revoke(token, remaining as u64).await?;
        info!(subject = %claims.sub, ttl_seconds = remaining, "token revoked");
        Ok(())
    }

    /// Compute how many seconds a presented token remains valid
    ///
    /// The revocation check runs before any expiry computation and
    /// short-circuits: a revoked token reports revoked even while its
    /// claims are still in date.
    ///
    /// # Returns
    /// * `Ok(i64)` - Positive seconds of remaining validity
    /// * `Err(TokenError::Revoked)` - Present in the revocation registry
    /// * `Err(TokenError::Expired)` - Past its claimed expiry
    /// * `Err(TokenError::Malformed | InvalidSignature)` - Decode failure
    pub async fn validate(&self, token: &str) -> DomainResult<i64> {
        if self.revocations.is_revoked(token).await? {
            return Err(TokenError::Revoked.into());
        }

        Ok(self.codec.remaining_validity(token)?)
    }

    /// The codec backing this service
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}
