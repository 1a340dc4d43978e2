//! Low-level HTTP client — `SmsHttp`.
//!
//! Single point of outbound request configuration: bearer injection from the
//! injected token store, status normalization into [`HttpError`], and the
//! envelope-returning verb methods the sub-clients build on. Credential-aware
//! 401 handling lives here: a rejected bearer clears the token store and
//! fires the unauthorized hook, while a 401 on a request sent without a
//! bearer (a failed login, which opts out via [`BearerMode::Skip`]) is
//! surfaced as an ordinary error.

use crate::auth::store::TokenStore;
use crate::error::{detail_from_body, HttpError};
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::ApiResponse;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Callback invoked when a bearer-authenticated request is rejected with 401.
///
/// The application's session controller owns the decision of what to do next
/// (typically: reset session state and navigate to the login screen). The
/// transport layer only reports the event.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Request body shapes supported by the API.
pub(crate) enum Payload<'a, B: Serialize + ?Sized> {
    Empty,
    Json(&'a B),
    /// Form-urlencoded, used by the OAuth2 password-grant login endpoint.
    Form(&'a B),
}

/// Whether a request carries the stored bearer credential.
///
/// Login must use `Skip`: a password grant authenticates with the form body
/// alone, and attaching a stored bearer would let a mistyped re-login 401
/// tear down the existing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BearerMode {
    Attach,
    Skip,
}

/// Low-level HTTP client for the SunuSMS REST API.
#[derive(Clone)]
pub struct SmsHttp {
    base_url: String,
    client: Client,
    tokens: Arc<dyn TokenStore>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl SmsHttp {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().unwrap_or_default(),
            tokens,
            on_unauthorized: None,
        }
    }

    /// Register the callback fired when an authenticated request gets a 401.
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    // ── Envelope verb methods ────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        self.envelope(
            self.request_json::<T, ()>(
                Method::GET,
                path,
                Payload::Empty,
                RetryPolicy::Idempotent,
                BearerMode::Attach,
            )
            .await,
        )
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.envelope(
            self.request_json(
                Method::POST,
                path,
                Payload::Json(body),
                RetryPolicy::None,
                BearerMode::Attach,
            )
            .await,
        )
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        self.envelope(
            self.request_json(
                Method::PUT,
                path,
                Payload::Json(body),
                RetryPolicy::None,
                BearerMode::Attach,
            )
            .await,
        )
    }

    pub async fn delete(&self, path: &str) -> ApiResponse<()> {
        match self
            .request_unit::<()>(
                Method::DELETE,
                path,
                Payload::Empty,
                RetryPolicy::None,
                BearerMode::Attach,
            )
            .await
        {
            Ok(()) => ApiResponse::ok(()),
            Err(e) => self.envelope::<()>(Err(e)),
        }
    }

    fn envelope<T>(&self, result: Result<T, HttpError>) -> ApiResponse<T> {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => {
                tracing::debug!(error = %e, "request failed");
                ApiResponse::err(e.user_message())
            }
        }
    }

    // ── Result-returning internals ───────────────────────────────────────
    //
    // Sub-clients needing status-specific error mapping (login) use these.

    pub(crate) async fn request_json<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_, B>,
        retry: RetryPolicy,
        bearer: BearerMode,
    ) -> Result<T, HttpError> {
        let resp = self
            .send_with_retry(method, path, &payload, retry, bearer)
            .await?;
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn request_unit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_, B>,
        retry: RetryPolicy,
        bearer: BearerMode,
    ) -> Result<(), HttpError> {
        self.send_with_retry(method, path, &payload, retry, bearer)
            .await?;
        Ok(())
    }

    async fn send_with_retry<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        payload: &Payload<'_, B>,
        retry: RetryPolicy,
        bearer: BearerMode,
    ) -> Result<reqwest::Response, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, path, payload, bearer).await;
            }
            RetryPolicy::Idempotent => RetryConfig::default(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request(&method, path, payload, bearer).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying {} {}",
                            method,
                            path
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &Method,
        path: &str,
        payload: &Payload<'_, B>,
        bearer: BearerMode,
    ) -> Result<reqwest::Response, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method.clone(), &url);

        let bearer_attached = match (bearer, self.tokens.load()) {
            (BearerMode::Attach, Some(session)) => {
                req = req.bearer_auth(&session.token);
                true
            }
            _ => false,
        };

        match payload {
            Payload::Empty => {}
            Payload::Json(b) => req = req.json(b),
            Payload::Form(b) => {
                let encoded = serde_urlencoded::to_string(b)
                    .map_err(|e| HttpError::Encode(e.to_string()))?;
                req = req
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(encoded);
            }
        }

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();
        let detail = detail_from_body(&body);

        if status_code == 401 && bearer_attached {
            tracing::warn!(path, "bearer credential rejected, tearing down session");
            self.tokens.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }

        Err(match status_code {
            401 => HttpError::Unauthorized { detail },
            404 => HttpError::NotFound { detail },
            400 => HttpError::BadRequest { detail },
            402..=499 => HttpError::ServerError {
                status: status_code,
                detail,
            },
            _ => HttpError::ServerError {
                status: status_code,
                detail,
            },
        })
    }
}
