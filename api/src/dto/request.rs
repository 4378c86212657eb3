//! Request DTOs
//!
//! Every POST body is an envelope of a `traceId` plus an
//! operation-specific `data` payload. The payload is parsed in a second
//! step so that a bad `data` shape yields a descriptive 400 from the
//! handler instead of a transport-level error.

use serde::Deserialize;

/// Request envelope common to all POST endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRequest {
    /// Caller-supplied trace id, echoed into log lines
    #[serde(rename = "traceId")]
    pub trace_id: String,

    /// Operation-specific payload, parsed per endpoint
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ApiRequest {
    /// Parse the `data` payload into the operation's expected shape
    pub fn parse_data<T>(&self) -> Result<T, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.data.clone())
    }
}

/// Payload for registration and token issuance
#[derive(Debug, Clone, Deserialize)]
pub struct UserAuthRequest {
    pub username: String,
    pub password: String,
}

/// Payload for revocation and renewal
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_parses_in_two_stages() {
        let request: ApiRequest = serde_json::from_value(json!({
            "traceId": "t-1",
            "data": {"username": "alice", "password": "p1"}
        }))
        .unwrap();

        let auth: UserAuthRequest = request.parse_data().unwrap();
        assert_eq!(auth.username, "alice");
        assert_eq!(auth.password, "p1");
    }

    #[test]
    fn test_bad_payload_fails_the_second_stage_only() {
        let request: ApiRequest = serde_json::from_value(json!({
            "traceId": "t-2",
            "data": {"token": 42}
        }))
        .unwrap();

        assert!(request.parse_data::<TokenRequest>().is_err());
    }
}
