//! Durable token storage behind the [`TokenStore`] trait.
//!
//! The HTTP layer and the auth sub-client share one injected store instead of
//! reading an ambient global slot. Two implementations ship with the SDK:
//! [`MemoryTokenStore`] for tests and short-lived processes, and
//! [`FileTokenStore`] for sessions that must survive a restart.

use crate::auth::User;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

/// The persisted session slot: the bearer token plus an optional cached copy
/// of the user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistedSession {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl PersistedSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }
}

/// Credential provider injected into the HTTP layer.
///
/// Writes are serialized by the caller's event loop; implementations only
/// need internal consistency, not cross-process locking.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: PersistedSession);
    fn clear(&self);
}

// ─── MemoryTokenStore ────────────────────────────────────────────────────────

/// Process-local store. Sessions do not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<PersistedSession>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with an existing session, e.g. in tests.
    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<PersistedSession> {
        self.slot.read().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, session: PersistedSession) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = Some(session);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.slot.write() {
            *guard = None;
        }
    }
}

// ─── FileTokenStore ──────────────────────────────────────────────────────────

/// JSON-file-backed store; the Rust analogue of the browser's durable
/// `token`/`user` storage.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<PersistedSession> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "corrupt session file ignored");
                None
            }
        }
    }

    fn save(&self, session: PersistedSession) {
        let serialized = match serde_json::to_string_pretty(&session) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "session not persisted");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, serialized) {
            tracing::warn!(path = %self.path.display(), error = %e, "session not persisted");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "session file not removed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "sunusms-session-{}-{}-{}.json",
            tag,
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.save(PersistedSession::new("tok-1"));
        assert_eq!(store.load().unwrap().token, "tok-1");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_memory_store_overwrites() {
        let store = MemoryTokenStore::with_session(PersistedSession::new("old"));
        store.save(PersistedSession::new("new"));
        assert_eq!(store.load().unwrap().token, "new");
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = FileTokenStore::new(temp_path("roundtrip"));
        assert!(store.load().is_none());

        store.save(PersistedSession::new("tok-file"));
        assert_eq!(store.load().unwrap().token, "tok-file");

        store.clear();
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_survives_reload() {
        let path = temp_path("reload");
        FileTokenStore::new(&path).save(PersistedSession::new("persisted"));

        // A fresh store over the same path sees the session.
        let reopened = FileTokenStore::new(&path);
        assert_eq!(reopened.load().unwrap().token, "persisted");
        reopened.clear();
    }

    #[test]
    fn test_file_store_ignores_corrupt_content() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "{not json").unwrap();
        let store = FileTokenStore::new(&path);
        assert!(store.load().is_none());
        store.clear();
    }

    #[test]
    fn test_clear_missing_file_is_noop() {
        let store = FileTokenStore::new(temp_path("missing"));
        store.clear();
        assert!(store.load().is_none());
    }
}
