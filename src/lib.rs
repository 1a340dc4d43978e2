//! # SunuSMS SDK
//!
//! A Rust SDK for the SunuSMS platform: authentication, a contact address
//! book, SMS sending, and send-history queries over the platform's REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared value types, domain models, state containers (always available)
//! 2. **Auth** — Session types, token storage, session state reducer
//! 3. **HTTP API** — `SmsHttp` with bearer injection and per-endpoint retry policies
//! 4. **High-Level Client** — `SunuSmsClient` with nested sub-clients
//!
//! Every sub-client operation resolves to an [`ApiResponse`] envelope instead
//! of a `Result`: transport failures, server errors, and client-side
//! validation failures all surface through `success == false` plus a
//! user-facing message. State containers fold those envelopes into UI-visible
//! state via tagged events.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sunusms_sdk::prelude::*;
//!
//! let client = SunuSmsClient::builder()
//!     .base_url("http://localhost:8000/api/v1")
//!     .build();
//!
//! let login = client.auth().login(&LoginRequest::new("user@test.sn", "secret")).await;
//! let contacts = client.contacts().list().await;
//! let sent = client.sms().send(SmsSend::new("+221771234567", "Bonjour")).await;
//! ```
//!
//! [`ApiResponse`]: shared::ApiResponse

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared value types used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and environment resolution.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: user types, token storage, session state, login/signup.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with bearer injection and retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `SunuSmsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared value types
    pub use crate::shared::envelope::{ApiResponse, ErrorResponse};
    pub use crate::shared::phone::{PhoneError, PhoneNumber};

    // Domain types — contacts
    pub use crate::domain::contact::{Contact, ContactCreate, ContactUpdate};

    // Domain types — sms
    pub use crate::domain::sms::{
        DeliveryStatus, Sms, SmsSend, SmsStatus, MAX_SMS_LENGTH,
    };

    // Errors
    pub use crate::error::SdkError;

    // Network
    pub use crate::network::{api_url_from_env, DEFAULT_API_URL};

    // Auth types
    pub use crate::auth::store::{FileTokenStore, MemoryTokenStore, PersistedSession, TokenStore};
    pub use crate::auth::{LoginRequest, Token, User, UserCreate};

    // State containers + events
    pub use crate::auth::state::{SessionEvent, SessionState};
    pub use crate::domain::contact::state::{ContactBook, ContactEvent};
    pub use crate::domain::sms::state::{SmsEvent, SmsHistory};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AuthClient, ContactsClient, SmsSubClient, SunuSmsClient, SunuSmsClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
