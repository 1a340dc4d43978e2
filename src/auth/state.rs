//! Session state container — app-owned, SDK-provided update logic.
//!
//! The app owns a [`SessionState`] and folds [`SessionEvent`]s into it: one
//! request/success/failure event per auth operation, applied in the order the
//! operations resolve. Each `apply` is atomic relative to one request's
//! resolution, so observers never see a half-updated session.

use crate::auth::store::TokenStore;
use crate::auth::{Token, User};
use crate::shared::ApiResponse;

/// Fallback when a login failure carries no message.
pub const LOGIN_FAILED_FALLBACK: &str = "Email ou mot de passe incorrect";

/// Fallback when a signup failure carries no message.
pub const SIGNUP_FAILED_FALLBACK: &str = "Échec de l'inscription";

/// Authentication session state.
///
/// `is_authenticated` is derived from token presence; signup success stores
/// the created user without authenticating (the backend issues no token on
/// signup).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    /// Fresh state with no persisted session.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }

    /// Initial state at process start, derived from the persisted session.
    pub fn from_store(store: &dyn TokenStore) -> Self {
        match store.load() {
            Some(session) => Self {
                user: session.user,
                is_authenticated: true,
                token: Some(session.token),
                is_loading: false,
                error: None,
            },
            None => Self::anonymous(),
        }
    }

    /// Fold one event into the state.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::LoginRequested | SessionEvent::SignupRequested => {
                self.is_loading = true;
                self.error = None;
            }
            SessionEvent::LoginSucceeded { token } => {
                self.is_loading = false;
                self.is_authenticated = true;
                self.token = Some(token);
                self.error = None;
            }
            SessionEvent::SignupSucceeded { user } => {
                self.is_loading = false;
                self.user = Some(user);
                self.error = None;
            }
            SessionEvent::LoginFailed { message } | SessionEvent::SignupFailed { message } => {
                self.is_loading = false;
                self.error = Some(message);
            }
            SessionEvent::LoggedOut => {
                self.is_authenticated = false;
                self.user = None;
                self.token = None;
            }
            SessionEvent::UserLoaded { user } => {
                self.user = Some(user);
            }
            SessionEvent::ErrorCleared => {
                self.error = None;
            }
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// Tagged session transition, one request/success/failure case per operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    LoginRequested,
    LoginSucceeded { token: String },
    LoginFailed { message: String },
    SignupRequested,
    SignupSucceeded { user: User },
    SignupFailed { message: String },
    LoggedOut,
    UserLoaded { user: User },
    ErrorCleared,
}

impl SessionEvent {
    /// Fold a settled login envelope into the matching event.
    pub fn login_settled(resp: ApiResponse<Token>) -> Self {
        match resp.data {
            Some(token) if resp.success => SessionEvent::LoginSucceeded {
                token: token.access_token,
            },
            _ => SessionEvent::LoginFailed {
                message: resp
                    .message
                    .unwrap_or_else(|| LOGIN_FAILED_FALLBACK.to_string()),
            },
        }
    }

    /// Fold a settled signup envelope into the matching event.
    pub fn signup_settled(resp: ApiResponse<User>) -> Self {
        match resp.data {
            Some(user) if resp.success => SessionEvent::SignupSucceeded { user },
            _ => SessionEvent::SignupFailed {
                message: resp
                    .message
                    .unwrap_or_else(|| SIGNUP_FAILED_FALLBACK.to_string()),
            },
        }
    }
}
