//! Authentication — user types, token storage, session state, login/signup.
//!
//! ## Security model
//!
//! The backend issues a bearer token from the OAuth2 password-grant endpoint
//! (`POST /auth/login/access-token`, form-urlencoded body). The SDK never
//! keeps the token in an ambient global: it lives in an injected
//! [`TokenStore`](store::TokenStore), which the HTTP layer consults per
//! request and clears when a bearer credential is rejected.
//!
//! Signup does not authenticate: the backend returns the created [`User`]
//! record without a token, so a signup success leaves the session anonymous
//! and the caller chains a `login()` when auto-login is wanted.

#[cfg(feature = "http")]
pub mod client;

pub mod state;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// User types
// ============================================================================

/// A platform user. The client holds a read-only cached copy of the backend
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

// ============================================================================
// Login wire types
// ============================================================================

/// Credentials for the password-grant login endpoint.
///
/// The field is called `username` because that is what the OAuth2 form
/// expects; in practice it carries the user's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Token response from a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}
