//! Shared constants used across the application

/// Model requested when neither `--model` nor the config file names one.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Upper bound on generated tokens per completion.
pub const MAX_COMPLETION_TOKENS: u32 = 4096;

/// Base URL for the Anthropic Messages API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.anthropic.com/v1";

/// Default MCP server endpoint when `--mcp-server` is not given.
pub const DEFAULT_MCP_SERVER: &str = "http://localhost:5000";

/// Per-command execution timeout, in seconds.
pub const COMMAND_TIMEOUT_SECS: u64 = 30;

/// Health probe timeout, in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 2;

/// Tools whose bare invocation counts as a command request. Overridable via
/// the `known_tools` config key.
pub const DEFAULT_KNOWN_TOOLS: &[&str] = &[
    "nmap", "nikto", "gobuster", "dirb", "sqlmap", "hydra", "netcat", "nc", "curl", "wget", "dig",
    "whois",
];
