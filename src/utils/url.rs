//! URL helpers for consistent endpoint construction.

/// Normalize a base URL by removing trailing slashes, so appending endpoint
/// paths never produces double slashes.
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Join a base URL and an endpoint path.
///
/// # Examples
///
/// ```
/// use strikechat::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:5000/", "/api/command"),
///     "http://localhost:5000/api/command"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:5000/"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_base_url("http://localhost:5000///"),
            "http://localhost:5000"
        );
        assert_eq!(
            normalize_base_url("http://localhost:5000"),
            "http://localhost:5000"
        );
        assert_eq!(normalize_base_url(""), "");
    }

    #[test]
    fn construct_handles_slashes_on_either_side() {
        assert_eq!(
            construct_api_url("https://api.anthropic.com/v1", "messages"),
            "https://api.anthropic.com/v1/messages"
        );
        assert_eq!(
            construct_api_url("https://api.anthropic.com/v1/", "/messages"),
            "https://api.anthropic.com/v1/messages"
        );
        assert_eq!(
            construct_api_url("http://localhost:5000///", "health"),
            "http://localhost:5000/health"
        );
    }
}
