//! Adapter for the remote MCP execution server.
//!
//! The server exposes a plain HTTP surface: `GET /health` for availability
//! and `POST /api/command` to run one command and capture its output. All
//! transport failures are folded into [`CommandResult::from_error`] so that
//! nothing past this boundary ever has to handle a transport error type.

use crate::core::constants::PROBE_TIMEOUT_SECS;
use crate::utils::url::{construct_api_url, normalize_base_url};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Captured output of one remote command execution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandResult {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandResult {
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

#[derive(Serialize)]
struct CommandRequest<'a> {
    command: &'a str,
}

/// Seam between the session and the remote execution transport.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    fn is_enabled(&self) -> bool;

    /// Runs one command, bounded by `timeout`. Never fails; failures are
    /// reported through [`CommandResult::error`].
    async fn execute(&self, command: &str, timeout: Duration) -> CommandResult;
}

pub struct McpClient {
    server_url: String,
    enabled: bool,
    client: reqwest::Client,
}

impl McpClient {
    /// Creates a client in the disabled state; call [`McpClient::probe`] to
    /// enable it.
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: normalize_base_url(server_url),
            enabled: false,
            client: reqwest::Client::new(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Checks whether the MCP server is reachable, updating and returning
    /// the enabled flag.
    pub async fn probe(&mut self) -> bool {
        let url = construct_api_url(&self.server_url, "health");
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .send()
            .await;
        self.enabled = matches!(response, Ok(r) if r.status().is_success());
        debug!(server = %self.server_url, enabled = self.enabled, "mcp health probe");
        self.enabled
    }
}

#[async_trait]
impl CommandExecutor for McpClient {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn execute(&self, command: &str, timeout: Duration) -> CommandResult {
        if !self.enabled {
            return CommandResult::from_error("MCP server not connected");
        }

        let url = construct_api_url(&self.server_url, "api/command");
        debug!(%command, "dispatching command to mcp server");

        let response = match self
            .client
            .post(url)
            .timeout(timeout)
            .json(&CommandRequest { command })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return CommandResult::from_error(format!("Request failed: {e}")),
        };

        if !response.status().is_success() {
            return CommandResult::from_error(format!(
                "Request failed with status {}",
                response.status()
            ));
        }

        match response.json::<CommandResult>().await {
            Ok(result) => result,
            Err(e) => CommandResult::from_error(format!("Invalid response body: {e}")),
        }
    }
}

/// Folds a [`CommandResult`] into the single text block spliced into the
/// conversation: stdout first, then a `[stderr]:` line when stderr is
/// non-empty. An executor-reported error replaces the output entirely, and a
/// result with no output at all falls back to its raw JSON form.
pub fn combine_output(result: &CommandResult) -> String {
    if let Some(error) = &result.error {
        return format!("Command failed: {error}");
    }

    let mut combined = String::new();
    if !result.stdout.is_empty() {
        combined.push_str(&result.stdout);
    }
    if !result.stderr.is_empty() {
        combined.push_str(&format!("\n[stderr]: {}", result.stderr));
    }

    if combined.is_empty() {
        serde_json::to_string(result).unwrap_or_default()
    } else {
        combined
    }
}
