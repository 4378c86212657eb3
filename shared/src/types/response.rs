//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every endpoint
///
/// Either an error (message + status code) or a success (message +
/// status code + optional payload); absent fields are omitted from the
/// serialized body, never emitted as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Human-readable outcome message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// HTTP status code mirrored into the body
    #[serde(rename = "statusCode", skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    /// Payload rows, present only on success paths that produce a result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<serde_json::Value>>,
}

impl ApiResponse {
    /// Create a response carrying only a message and status code
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            status_code: Some(status_code),
            data: None,
        }
    }

    /// Create a successful response with a payload
    pub fn with_data(
        status_code: u16,
        message: impl Into<String>,
        data: Vec<serde_json::Value>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            status_code: Some(status_code),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let response = ApiResponse::message(400, "User already exists");
        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(
            serialized,
            json!({"message": "User already exists", "statusCode": 400})
        );
    }

    #[test]
    fn test_payload_is_a_list() {
        let response = ApiResponse::with_data(200, "ok", vec![json!({"ping": "pong"})]);
        let serialized = serde_json::to_value(&response).unwrap();

        assert_eq!(serialized["data"], json!([{"ping": "pong"}]));
    }
}
