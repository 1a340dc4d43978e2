//! High-level client — `SunuSmsClient` with nested sub-client accessors.
//!
//! Each resource family has its own sub-client (`auth()`, `contacts()`,
//! `sms()`). This module keeps the builder and the shared HTTP wrapper.

use crate::auth::client::Auth;
use crate::auth::state::SessionState;
use crate::auth::store::{MemoryTokenStore, TokenStore};
use crate::domain::contact::client::Contacts;
use crate::domain::sms::client::SmsMessages;
use crate::http::{SmsHttp, UnauthorizedHook};
use crate::network;

use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::contact::client::Contacts as ContactsClient;
pub use crate::domain::sms::client::SmsMessages as SmsSubClient;

/// The primary entry point for the SunuSMS SDK.
///
/// Provides nested sub-client accessors per resource family:
/// `client.auth()`, `client.contacts()`, `client.sms()`.
#[derive(Clone)]
pub struct SunuSmsClient {
    pub(crate) http: SmsHttp,
}

impl SunuSmsClient {
    pub fn builder() -> SunuSmsClientBuilder {
        SunuSmsClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn contacts(&self) -> Contacts<'_> {
        Contacts { client: self }
    }

    pub fn sms(&self) -> SmsMessages<'_> {
        SmsMessages { client: self }
    }

    /// The underlying HTTP wrapper, for callers hitting endpoints the typed
    /// sub-clients do not cover.
    pub fn http(&self) -> &SmsHttp {
        &self.http
    }

    /// Initial session state derived from the persisted token, for seeding a
    /// [`SessionState`] container at startup.
    pub fn initial_session_state(&self) -> SessionState {
        SessionState::from_store(self.http.tokens().as_ref())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SunuSmsClientBuilder {
    base_url: String,
    tokens: Option<Arc<dyn TokenStore>>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl Default for SunuSmsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: network::api_url_from_env(),
            tokens: None,
            on_unauthorized: None,
        }
    }
}

impl SunuSmsClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Inject the credential store. Defaults to a process-local
    /// [`MemoryTokenStore`]; use a [`FileTokenStore`] for sessions that
    /// survive a restart.
    ///
    /// [`FileTokenStore`]: crate::auth::store::FileTokenStore
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(store);
        self
    }

    /// Register the callback fired when a bearer-authenticated request is
    /// rejected with 401. The token store is already cleared when it runs;
    /// the application decides what happens next (typically navigation to
    /// the login screen).
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn build(self) -> SunuSmsClient {
        let tokens = self
            .tokens
            .unwrap_or_else(|| Arc::new(MemoryTokenStore::new()));
        let mut http = SmsHttp::new(&self.base_url, tokens);
        if let Some(hook) = self.on_unauthorized {
            http = http.with_unauthorized_hook(hook);
        }
        SunuSmsClient { http }
    }
}
