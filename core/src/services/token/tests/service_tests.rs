//! Unit tests for the token lifecycle service

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{
    MockCredentialRepository, MockRevocationRepository, RevocationRepository,
};
use crate::services::token::{TokenLifecycleService, TokenServiceConfig};

type TestService = TokenLifecycleService<MockCredentialRepository, MockRevocationRepository>;

fn test_service() -> (TestService, MockRevocationRepository) {
    let revocations = MockRevocationRepository::new();
    let service = TokenLifecycleService::new(
        MockCredentialRepository::new(),
        revocations.clone(),
        TokenServiceConfig {
            jwt_secret: "test-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    );
    (service, revocations)
}

#[tokio::test]
async fn test_register_twice_conflicts() {
    let (service, _) = test_service();

    service.register("alice", "p1").await.unwrap();
    let err = service.register("alice", "p2").await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));
}

#[tokio::test]
async fn test_issue_rejects_wrong_secret_and_unknown_user() {
    let (service, _) = test_service();
    service.register("alice", "p1").await.unwrap();

    let err = service.issue("alice", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));

    let err = service.issue("nobody", "p1").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_issue_then_validate_reports_remaining_seconds() {
    let (service, _) = test_service();
    service.register("alice", "p1").await.unwrap();

    let pair = service.issue("alice", "p1").await.unwrap();
    let remaining = service.validate(&pair.access_token).await.unwrap();

    assert!(remaining > 0);
    assert!(remaining <= 15 * 60);
}

#[tokio::test]
async fn test_revoked_token_reports_revoked_while_unexpired() {
    let (service, _) = test_service();
    service.register("alice", "p1").await.unwrap();
    let pair = service.issue("alice", "p1").await.unwrap();

    service.revoke(&pair.access_token).await.unwrap();

    // The claims are still in date, but revocation wins
    let err = service.validate(&pair.access_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
}

#[tokio::test]
async fn test_revocation_marker_never_outlives_the_token() {
    let (service, revocations) = test_service();
    service.register("alice", "p1").await.unwrap();
    let pair = service.issue("alice", "p1").await.unwrap();

    service.revoke(&pair.access_token).await.unwrap();

    let remaining = service
        .codec()
        .decode(&pair.access_token)
        .unwrap()
        .remaining_seconds(Utc::now());
    let ttl = revocations.entry_ttl(&pair.access_token).await.unwrap();

    assert!(ttl <= remaining);
}

#[tokio::test]
async fn test_revoking_an_expired_token_is_already_expired() {
    let (service, _) = test_service();
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(30));
    let token = service.codec().encode(&claims).unwrap();

    let err = service.revoke(&token).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::AlreadyExpired)
    ));
}

#[tokio::test]
async fn test_revoking_garbage_is_not_already_expired() {
    let (service, _) = test_service();

    let err = service.revoke("garbage").await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}

#[tokio::test]
async fn test_renew_mints_access_token_for_same_subject() {
    let (service, _) = test_service();
    service.register("alice", "p1").await.unwrap();
    let pair = service.issue("alice", "p1").await.unwrap();

    let access_token = service.renew(&pair.refresh_token).await.unwrap();
    let claims = service.codec().decode(&access_token).unwrap();

    assert_eq!(claims.sub, "alice");
}

#[tokio::test]
async fn test_renew_with_expired_refresh_token_never_mints() {
    let (service, _) = test_service();
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(30));
    let expired = service.codec().encode(&claims).unwrap();

    let err = service.renew(&expired).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::RefreshTokenExpired)
    ));
}

#[tokio::test]
async fn test_renew_with_malformed_token_keeps_decode_kind() {
    let (service, _) = test_service();

    let err = service.renew("not-a-jwt").await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}

#[tokio::test]
async fn test_validate_checks_revocation_before_expiry() {
    let (service, revocations) = test_service();

    // An expired token whose revocation marker is still live
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(5));
    let token = service.codec().encode(&claims).unwrap();
    revocations.revoke(&token, 60).await.unwrap();

    let err = service.validate(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Revoked)));
}

#[tokio::test]
async fn test_validate_expired_token_is_unauthorized_state() {
    let (service, _) = test_service();
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(5));
    let token = service.codec().encode(&claims).unwrap();

    let err = service.validate(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn test_validate_malformed_token_keeps_decode_kind() {
    let (service, _) = test_service();

    let err = service.validate("////").await.unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Malformed)));
}
