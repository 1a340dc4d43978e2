//! Auth sub-client — login, signup, logout.

use reqwest::Method;

use crate::auth::store::PersistedSession;
use crate::auth::{LoginRequest, Token, User, UserCreate};
use crate::client::SunuSmsClient;
use crate::error::HttpError;
use crate::http::client::{BearerMode, Payload};
use crate::http::RetryPolicy;
use crate::shared::ApiResponse;

/// Fixed message for a 401 on login, regardless of any server detail.
pub const BAD_CREDENTIALS_MESSAGE: &str = "Email ou mot de passe incorrect";

/// Fixed message for a 400 on login when the server supplies no detail.
pub const INVALID_LOGIN_MESSAGE: &str = "Informations de connexion invalides";

/// Fallback message for signup failures without a server detail.
pub const SIGNUP_FAILED_MESSAGE: &str = "Erreur lors de l'inscription";

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a SunuSmsClient,
}

impl<'a> Auth<'a> {
    /// Log in against the OAuth2 password-grant endpoint.
    ///
    /// The body is form-urlencoded (`username`/`password`), not JSON — the
    /// backend authentication endpoint requires it. No bearer credential is
    /// attached even when a session is already persisted: the grant
    /// authenticates with the form body alone, and a rejected re-login must
    /// not tear down the existing session. On success the token is persisted
    /// through the token store before the envelope is returned, so the very
    /// next request already carries the bearer credential.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResponse<Token> {
        let result: Result<Token, HttpError> = self
            .client
            .http
            .request_json(
                Method::POST,
                "/auth/login/access-token",
                Payload::Form(credentials),
                RetryPolicy::None,
                BearerMode::Skip,
            )
            .await;

        match result {
            Ok(token) => {
                self.client
                    .http
                    .tokens()
                    .save(PersistedSession::new(token.access_token.clone()));
                ApiResponse::ok(token)
            }
            Err(e) => ApiResponse::err(login_failure_message(&e)),
        }
    }

    /// Create an account. Succeeding does not authenticate: the backend
    /// returns the created user record without a token.
    pub async fn signup(&self, user: &UserCreate) -> ApiResponse<User> {
        let result: Result<User, HttpError> = self
            .client
            .http
            .request_json(
                Method::POST,
                "/auth/signup",
                Payload::Json(user),
                RetryPolicy::None,
                BearerMode::Attach,
            )
            .await;

        match result {
            Ok(created) => ApiResponse::ok(created),
            Err(e) => {
                ApiResponse::err(e.detail().unwrap_or(SIGNUP_FAILED_MESSAGE).to_string())
            }
        }
    }

    /// Drop the persisted session. Synchronous, no network call; the backend
    /// holds no server-side session state for bearer tokens.
    pub fn logout(&self) {
        self.client.http.tokens().clear();
    }

    /// Whether a token is currently persisted.
    pub fn is_authenticated(&self) -> bool {
        self.client.http.tokens().load().is_some()
    }

    /// The persisted session, if any.
    pub fn session(&self) -> Option<PersistedSession> {
        self.client.http.tokens().load()
    }

    /// Cache the user record alongside the persisted token, so the session
    /// survives a restart with its user profile.
    pub fn remember_user(&self, user: User) {
        if let Some(session) = self.client.http.tokens().load() {
            self.client.http.tokens().save(session.with_user(user));
        }
    }
}

fn login_failure_message(err: &HttpError) -> String {
    match err.status() {
        Some(401) => BAD_CREDENTIALS_MESSAGE.to_string(),
        Some(400) => err.detail().unwrap_or(INVALID_LOGIN_MESSAGE).to_string(),
        _ => err.user_message(),
    }
}
