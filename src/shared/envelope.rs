//! The uniform success/failure envelope returned by every sub-client call.

use serde::{Deserialize, Serialize};

/// Result envelope for all sub-client operations.
///
/// Invariant: exactly one of `data.is_some()` / `success == false` holds.
/// The constructors are the only way code inside the SDK builds one, so a
/// half-filled envelope cannot be observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: None,
        }
    }

    /// Failed response carrying a user-facing message.
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    /// The message, or `fallback` when the failure carried none.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    /// Map the payload type, preserving success/message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            success: self.success,
            message: self.message,
        }
    }

    /// Split into `Ok(data)` / `Err(message)` for callers that prefer `Result`.
    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) if self.success => Ok(data),
            _ => Err(self
                .message
                .unwrap_or_else(|| crate::error::GENERIC_ERROR.to_string())),
        }
    }
}

/// Normalized error shape produced by the HTTP layer from any failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl From<&crate::error::HttpError> for ErrorResponse {
    fn from(err: &crate::error::HttpError) -> Self {
        Self {
            detail: err.user_message(),
            status_code: err.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{HttpError, GENERIC_ERROR};

    #[test]
    fn test_ok_holds_data_and_no_message() {
        let resp = ApiResponse::ok(42);
        assert!(resp.success);
        assert_eq!(resp.data, Some(42));
        assert_eq!(resp.message, None);
    }

    #[test]
    fn test_err_holds_message_and_no_data() {
        let resp: ApiResponse<()> = ApiResponse::err("boom");
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_exactly_one_of_data_or_failure() {
        let ok = ApiResponse::ok("x");
        assert!(ok.data.is_some() && ok.success);

        let err: ApiResponse<&str> = ApiResponse::err("no");
        assert!(err.data.is_none() && !err.success);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::ok(1).into_result(), Ok(1));
        let failed: ApiResponse<i32> = ApiResponse::err("bad");
        assert_eq!(failed.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn test_map_preserves_envelope() {
        let resp = ApiResponse::ok(2).map(|n| n * 10);
        assert_eq!(resp.data, Some(20));

        let failed: ApiResponse<i32> = ApiResponse::err("bad");
        let mapped = failed.map(|n| n * 10);
        assert!(!mapped.success);
        assert_eq!(mapped.message.as_deref(), Some("bad"));
    }

    #[test]
    fn test_error_response_from_http_error() {
        let err = HttpError::NotFound {
            detail: Some("Contact non trouvé".into()),
        };
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.detail, "Contact non trouvé");
        assert_eq!(resp.status_code, Some(404));

        let resp = ErrorResponse::from(&HttpError::Timeout);
        assert_eq!(resp.detail, GENERIC_ERROR);
        assert_eq!(resp.status_code, None);
    }
}
