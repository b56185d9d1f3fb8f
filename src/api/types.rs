//! Wire types for the PsstBin API
//!
//! Field names follow the service's JSON contract. The `salt`/`iv` pair
//! only travels when the content is a client-encrypted envelope; the
//! server stores all three blobs as opaque text.

use serde::{Deserialize, Serialize};

/// Body of `POST /create`
#[derive(Debug, Clone, Serialize)]
pub struct CreateRequest {
    /// Requested paste id; the server generates one when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paste_id: Option<String>,

    /// Paste content: plaintext, or base64 ciphertext when encrypted
    pub content: String,

    /// Paste lifetime in seconds
    pub expiry_seconds: u64,

    /// Whether `content` is an encrypted envelope
    pub content_encrypted: bool,

    /// base64 key derivation salt (encrypted pastes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    /// base64 AES-GCM nonce (encrypted pastes only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
}

/// Body of a successful `POST /create` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateResponse {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub expiry_seconds: u64,

    #[serde(default)]
    pub content_length: u64,

    /// True when the server's secret-pattern scan flagged the content
    #[serde(default)]
    pub secrets_detected: bool,

    #[serde(default)]
    pub secret_types: Vec<String>,
}

/// Body of a successful `POST /paste` response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasteResponse {
    #[serde(default)]
    pub paste_id: String,

    /// Whether `content` is an encrypted envelope
    #[serde(default)]
    pub encrypted: bool,

    #[serde(default)]
    pub content: String,

    /// base64 key derivation salt, present for encrypted pastes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,

    /// base64 AES-GCM nonce, present for encrypted pastes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,

    #[serde(default)]
    pub message: String,

    /// Secret-pattern labels, if the server returns them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_types: Option<String>,
}

/// Error body the API attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_omits_absent_fields() {
        let request = CreateRequest {
            paste_id: Some("my-paste-01".into()),
            content: "hello".into(),
            expiry_seconds: 3600,
            content_encrypted: false,
            salt: None,
            iv: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["paste_id"], "my-paste-01");
        assert_eq!(json["content_encrypted"], false);
        assert!(json.get("salt").is_none());
        assert!(json.get("iv").is_none());
    }

    #[test]
    fn test_create_request_carries_envelope_fields() {
        let request = CreateRequest {
            paste_id: None,
            content: "Y2lwaGVydGV4dA==".into(),
            expiry_seconds: 600,
            content_encrypted: true,
            salt: Some("c2FsdHNhbHRzYWx0c2E=".into()),
            iv: Some("bm9uY2Vub25jZQ==".into()),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("paste_id").is_none());
        assert_eq!(json["content_encrypted"], true);
        assert_eq!(json["salt"], "c2FsdHNhbHRzYWx0c2E=");
        assert_eq!(json["iv"], "bm9uY2Vub25jZQ==");
    }

    #[test]
    fn test_parse_create_response() {
        let body = r#"{
            "message": "Paste my-paste-01 created.",
            "expiry_seconds": 3600,
            "content_length": 11,
            "secrets_detected": true,
            "secret_types": ["AWS Access Key"]
        }"#;
        let response: CreateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.message, "Paste my-paste-01 created.");
        assert!(response.secrets_detected);
        assert_eq!(response.secret_types, vec!["AWS Access Key"]);
    }

    #[test]
    fn test_parse_plaintext_paste_response() {
        let body = r#"{
            "paste_id": "my-paste-01",
            "encrypted": false,
            "content": "hello world",
            "message": "Paste retrieved successfully"
        }"#;
        let response: PasteResponse = serde_json::from_str(body).unwrap();
        assert!(!response.encrypted);
        assert_eq!(response.content, "hello world");
        assert!(response.salt.is_none());
    }

    #[test]
    fn test_parse_encrypted_paste_response() {
        let body = r#"{
            "paste_id": "my-paste-01",
            "encrypted": true,
            "content": "Y2lwaGVydGV4dA==",
            "salt": "c2FsdHNhbHRzYWx0c2E=",
            "iv": "bm9uY2Vub25jZQ==",
            "message": "Paste retrieved successfully"
        }"#;
        let response: PasteResponse = serde_json::from_str(body).unwrap();
        assert!(response.encrypted);
        assert_eq!(response.salt.as_deref(), Some("c2FsdHNhbHRzYWx0c2E="));
        assert_eq!(response.iv.as_deref(), Some("bm9uY2Vub25jZQ=="));
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"message": "Paste already viewed"}"#;
        let error: ApiMessage = serde_json::from_str(body).unwrap();
        assert_eq!(error.message, "Paste already viewed");
    }
}
