//! HTTP client for the Messages API.
//!
//! The [`ChatBackend`] trait is the seam between the conversation session and
//! the transport; the session only ever sees "transcript in, reply text out".

use crate::api::{ChatRequest, ChatResponse};
use crate::core::constants::MAX_COMPLETION_TOKENS;
use crate::core::message::Message;
use crate::utils::url::construct_api_url;
use async_trait::async_trait;
use std::error::Error as StdError;
use std::fmt;
use tracing::debug;

#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, body decode).
    Http(reqwest::Error),
    /// The API answered with a non-success status.
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// A success response carrying no content blocks.
    EmptyReply,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http(source) => write!(f, "{source}"),
            ApiError::Status { status, body } => {
                write!(f, "API request failed with status {status}: {body}")
            }
            ApiError::EmptyReply => write!(f, "API response contained no content"),
        }
    }
}

impl StdError for ApiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ApiError::Http(source) => Some(source),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Sends the full ordered transcript and returns the assistant reply.
    async fn complete(&self, transcript: &[Message]) -> Result<String, ApiError>;
}

pub struct AnthropicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for AnthropicClient {
    async fn complete(&self, transcript: &[Message]) -> Result<String, ApiError> {
        let url = construct_api_url(&self.base_url, "messages");
        let request = ChatRequest {
            model: &self.model,
            max_tokens: MAX_COMPLETION_TOKENS,
            messages: transcript,
        };

        debug!(model = %self.model, turns = transcript.len(), "sending chat request");

        let response = self
            .client
            .post(url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(ApiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }

        let reply: ChatResponse = response.json().await.map_err(ApiError::Http)?;
        reply
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or(ApiError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_carry_status_and_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "invalid x-api-key".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("401"));
        assert!(rendered.contains("invalid x-api-key"));
    }

    #[test]
    fn empty_reply_has_a_readable_message() {
        assert_eq!(
            ApiError::EmptyReply.to_string(),
            "API response contained no content"
        );
    }
}
