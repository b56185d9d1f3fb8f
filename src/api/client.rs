//! Blocking HTTP client for the PsstBin API

use std::time::Duration;

use reqwest::blocking::Response;

use crate::error::{PsstError, PsstResult};

use super::types::{ApiMessage, CreateRequest, CreateResponse, PasteResponse};

/// Client for one PsstBin API endpoint
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client for the given base URL
    ///
    /// Every request carries `timeout` so a dead endpoint fails instead
    /// of hanging.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> PsstResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PsstError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Get the base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /create`: store a new paste
    pub fn create_paste(&self, request: &CreateRequest) -> PsstResult<CreateResponse> {
        let response = self
            .http
            .post(format!("{}/create", self.base_url))
            .json(request)
            .send()?;

        parse_response(response)
    }

    /// `POST /paste`: retrieve a paste by id
    ///
    /// One-time read: a successful call marks the paste as used on the
    /// server, so the returned value is the only chance to decrypt it.
    pub fn get_paste(&self, paste_id: &str) -> PsstResult<PasteResponse> {
        let response = self
            .http
            .post(format!("{}/paste", self.base_url))
            .json(&serde_json::json!({ "paste_id": paste_id }))
            .send()?;

        parse_response(response)
    }
}

/// Decode a response body, turning non-2xx statuses into `PsstError::Api`
/// with the server's message when one is present.
fn parse_response<T: serde::de::DeserializeOwned>(response: Response) -> PsstResult<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiMessage>(&body)
            .map(|m| m.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());

        return Err(PsstError::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body)
        .map_err(|e| PsstError::Json(format!("Invalid JSON response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("https://api.example.com/", Duration::from_secs(15)).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
