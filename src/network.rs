//! Network URL constants for the SunuSMS SDK.

/// Default REST API base URL (local backend, versioned prefix included).
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Environment variable consulted for the API base URL.
pub const API_URL_ENV: &str = "SUNUSMS_API_URL";

/// Resolve the API base URL: `SUNUSMS_API_URL` when set and non-empty,
/// otherwise [`DEFAULT_API_URL`].
pub fn api_url_from_env() -> String {
    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_API_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_has_versioned_prefix() {
        assert!(DEFAULT_API_URL.ends_with("/api/v1"));
    }
}
