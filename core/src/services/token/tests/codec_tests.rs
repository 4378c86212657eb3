//! Unit tests for the token codec

use chrono::{Duration, Utc};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;
use crate::services::token::{TokenCodec, TokenServiceConfig};

fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..TokenServiceConfig::default()
    })
}

#[test]
fn test_round_trip_preserves_subject_and_expiry() {
    let codec = test_codec();
    let expires_at = Utc::now() + Duration::minutes(10);
    let claims = Claims::new("alice", expires_at);

    let token = codec.encode(&claims).unwrap();
    let decoded = codec.decode(&token).unwrap();

    assert_eq!(decoded.sub, "alice");
    assert_eq!(decoded.exp, expires_at.timestamp());
}

#[test]
fn test_access_and_refresh_tokens_share_subject() {
    let codec = test_codec();
    let pair = codec.issue_pair("bob").unwrap();

    let access = codec.decode(&pair.access_token).unwrap();
    let refresh = codec.decode(&pair.refresh_token).unwrap();

    assert_eq!(access.sub, "bob");
    assert_eq!(refresh.sub, "bob");
    // Refresh outlives access by configuration
    assert!(refresh.exp > access.exp);
}

#[test]
fn test_decode_expired_token() {
    let codec = test_codec();
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(120));
    let token = codec.encode(&claims).unwrap();

    assert_eq!(codec.decode(&token), Err(TokenError::Expired));
}

#[test]
fn test_decode_rejects_foreign_signature() {
    let codec = test_codec();
    let other = TokenCodec::new(TokenServiceConfig {
        jwt_secret: "a-different-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    let token = other.issue_access_token("alice").unwrap();

    assert_eq!(codec.decode(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_decode_rejects_garbage() {
    let codec = test_codec();

    assert_eq!(
        codec.decode("not-a-token-at-all"),
        Err(TokenError::Malformed)
    );
    assert_eq!(codec.decode(""), Err(TokenError::Malformed));
}

#[test]
fn test_remaining_validity_within_configured_window() {
    let codec = TokenCodec::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        access_token_expiry_minutes: 15,
        ..TokenServiceConfig::default()
    });

    let token = codec.issue_access_token("alice").unwrap();
    let remaining = codec.remaining_validity(&token).unwrap();

    assert!(remaining > 0);
    assert!(remaining <= 15 * 60);
}

#[test]
fn test_remaining_seconds_decreases_and_flips_exactly_at_expiry() {
    // The codec reads the wall clock, so this samples the decoded claims
    // at explicit instants instead of real elapsed time.
    let codec = test_codec();
    let issued_at = Utc::now();
    let expires_at = issued_at + Duration::seconds(30);
    let token = codec.encode(&Claims::new("alice", expires_at)).unwrap();
    let claims = codec.decode(&token).unwrap();

    let mut previous = claims.remaining_seconds(issued_at);
    for elapsed in 1..=29 {
        let remaining = claims.remaining_seconds(issued_at + Duration::seconds(elapsed));
        assert!(remaining < previous);
        assert!(remaining > 0);
        previous = remaining;
    }

    // Validity ends exactly at `exp`, with no leeway past it
    assert_eq!(claims.remaining_seconds(expires_at), 0);
    assert_eq!(
        claims.remaining_seconds(expires_at + Duration::seconds(1)),
        -1
    );
}

#[test]
fn test_remaining_validity_expired_is_its_own_outcome() {
    let codec = test_codec();
    let claims = Claims::new("alice", Utc::now() - Duration::seconds(1));
    let token = codec.encode(&claims).unwrap();

    assert_eq!(codec.remaining_validity(&token), Err(TokenError::Expired));
    // Malformed input stays distinguishable from plain expiry
    assert_eq!(
        codec.remaining_validity("garbage"),
        Err(TokenError::Malformed)
    );
}
