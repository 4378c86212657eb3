//! Token entities: signed claims and the issued pair

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims carried by every token the service signs
///
/// Access and refresh tokens share this shape and are distinguished only
/// by how far `exp` lies in the future; there is no kind marker. Claims
/// are immutable once encoded - a token is the serialized, signed form
/// of its claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to
    pub sub: String,

    /// Absolute expiry as unix seconds
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` expiring at `expires_at`
    pub fn new(subject: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.into(),
            exp: expires_at.timestamp(),
        }
    }

    /// The expiry as a UTC timestamp, if `exp` is representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Whole seconds between `now` and the claimed expiry (negative once past)
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        self.exp - now.timestamp()
    }
}

/// Access + refresh token pair returned by issuance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,

    /// Long-lived refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Create a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
