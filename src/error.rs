//! Unified SDK error types.

use thiserror::Error;

/// Generic user-facing failure message, used whenever the server supplies
/// no `detail` of its own.
pub const GENERIC_ERROR: &str = "Une erreur est survenue";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors, normalized from transport failures and non-2xx statuses.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {detail:?}")]
    ServerError {
        status: u16,
        detail: Option<String>,
    },

    #[error("Unauthorized: {detail:?}")]
    Unauthorized { detail: Option<String> },

    #[error("Not found: {detail:?}")]
    NotFound { detail: Option<String> },

    #[error("Bad request: {detail:?}")]
    BadRequest { detail: Option<String> },

    #[error("Timeout")]
    Timeout,

    #[error("Request body encoding failed: {0}")]
    Encode(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

impl HttpError {
    /// HTTP status carried by this error, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } => Some(*status),
            HttpError::Unauthorized { .. } => Some(401),
            HttpError::NotFound { .. } => Some(404),
            HttpError::BadRequest { .. } => Some(400),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server-supplied `detail` message, when the response body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HttpError::ServerError { detail, .. }
            | HttpError::Unauthorized { detail }
            | HttpError::NotFound { detail }
            | HttpError::BadRequest { detail } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message suitable for the [`ApiResponse`] envelope: the server `detail`
    /// when present, the generic fallback otherwise.
    ///
    /// [`ApiResponse`]: crate::shared::ApiResponse
    pub fn user_message(&self) -> String {
        self.detail().unwrap_or(GENERIC_ERROR).to_string()
    }
}

/// Extract the `detail` field from a JSON error body, if parseable.
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?;
    match detail {
        serde_json::Value::String(s) => Some(s.clone()),
        // FastAPI validation errors ship `detail` as a structured array.
        other => Some(other.to_string()),
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Login failed: {0}")]
    LoginFailed(String),

    #[error("Signup failed: {0}")]
    SignupFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_string_body() {
        let body = r#"{"detail":"Email ou mot de passe incorrect"}"#;
        assert_eq!(
            detail_from_body(body).as_deref(),
            Some("Email ou mot de passe incorrect")
        );
    }

    #[test]
    fn test_detail_from_structured_body() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
        let detail = detail_from_body(body).unwrap();
        assert!(detail.contains("field required"));
    }

    #[test]
    fn test_detail_absent_or_unparseable() {
        assert_eq!(detail_from_body("not json"), None);
        assert_eq!(detail_from_body(r#"{"message":"nope"}"#), None);
    }

    #[test]
    fn test_user_message_falls_back_to_generic() {
        let err = HttpError::ServerError {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), GENERIC_ERROR);

        let err = HttpError::BadRequest {
            detail: Some("Cet email est déjà utilisé".into()),
        };
        assert_eq!(err.user_message(), "Cet email est déjà utilisé");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            HttpError::Unauthorized { detail: None }.status(),
            Some(401)
        );
        assert_eq!(HttpError::Timeout.status(), None);
    }
}
