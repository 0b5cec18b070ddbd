//! HTTP client for the event platform.
//!
//! One request per submission, no retries. A non-success status with a
//! structured `{"error": ...}` body surfaces the server's message; anything
//! that prevents a round trip surfaces the transport error's message.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::dtos::{CreateEventRequest, CreateEventResponse, ErrorBody};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered and rejected the request.
    #[error("{0}")]
    Server(String),
    /// The request never completed (connect, TLS, decode, ...).
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone)]
pub struct EventsApi {
    client: reqwest::Client,
    base_url: String,
}

impl EventsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submit a create-event request with the session's bearer token.
    pub async fn create_event(
        &self,
        request: &CreateEventRequest,
        token: &str,
    ) -> Result<CreateEventResponse, ApiError> {
        let url = format!("{}/events", self.base_url);
        tracing::debug!(%url, title = %request.title, "submitting create-event request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Server(server_message(status, &body)));
        }

        // A 2xx body may still carry a structured error payload.
        if let Ok(err) = serde_json::from_str::<ErrorBody>(&body) {
            return Err(ApiError::Server(err.error));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Best-available message for a rejected request: the structured payload's
/// `error` field when present, the HTTP status otherwise.
fn server_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) => format!("server responded with {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_structured_payload() {
        let msg = server_message(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"error": "limit exceeded"}"#,
        );
        assert_eq!(msg, "limit exceeded");
    }

    #[test]
    fn server_message_falls_back_to_status() {
        let msg = server_message(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert!(msg.contains("502"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = EventsApi::new("https://api.example.com/");
        assert_eq!(api.base_url, "https://api.example.com");
    }
}
