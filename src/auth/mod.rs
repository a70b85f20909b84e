//! Credential resolution for the model API.
//!
//! The key comes from the environment only. Resolution returns a typed error
//! instead of exiting; the process-exit decision belongs to `main`.

use crate::core::constants::DEFAULT_API_BASE_URL;
use std::env;
use std::error::Error as StdError;
use std::fmt;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_ENV: &str = "ANTHROPIC_BASE_URL";

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingApiKey,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingApiKey => write!(
                f,
                "{API_KEY_ENV} not found in environment\n\n\
                 Please set your API key:\n\
                 export {API_KEY_ENV}=\"your-api-key-here\""
            ),
        }
    }
}

impl StdError for AuthError {}

/// Reads the API key from the environment. A set-but-blank variable counts
/// as missing.
pub fn resolve_api_key() -> Result<String, AuthError> {
    key_from(env::var(API_KEY_ENV).ok())
}

fn key_from(value: Option<String>) -> Result<String, AuthError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AuthError::MissingApiKey),
    }
}

/// Base URL for the Messages API, overridable for proxies and test servers.
pub fn resolve_base_url() -> String {
    env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_absent_keys_count_as_missing() {
        assert_eq!(key_from(None), Err(AuthError::MissingApiKey));
        assert_eq!(key_from(Some(String::new())), Err(AuthError::MissingApiKey));
        assert_eq!(
            key_from(Some("   ".to_string())),
            Err(AuthError::MissingApiKey)
        );
        assert_eq!(key_from(Some("sk-test".to_string())).unwrap(), "sk-test");
    }

    #[test]
    fn missing_key_error_names_the_variable() {
        let message = AuthError::MissingApiKey.to_string();
        assert!(message.contains("ANTHROPIC_API_KEY"));
        assert!(message.contains("export"));
    }
}
