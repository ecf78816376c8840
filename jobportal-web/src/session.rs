//! Durable session storage.
//!
//! The bearer token and display name live in browser local storage under
//! fixed keys, so a reload keeps the user signed in until an explicit
//! logout. The backend trait keeps the store testable off-browser.

use gloo_storage::{LocalStorage, Storage};
use shared::models::Session;
use std::sync::Arc;

const TOKEN_KEY: &str = "token";
const DISPLAY_NAME_KEY: &str = "username";

/// Key-value persistence behind [`SessionStore`].
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

/// Browser local storage, the durable backend the running app uses.
#[derive(Debug, Default)]
pub struct BrowserBackend;

impl SessionBackend for BrowserBackend {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::set(key, value) {
            log::error!("session storage write failed: {err}");
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Read/write access to the persisted session.
///
/// The token is an opaque credential: no expiry, no structure validation.
/// Writes originate only from login, registration, and logout.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn SessionBackend>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by browser local storage.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserBackend))
    }

    /// Current token, or `None` when signed out.
    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Persist the token. An empty or absent value clears it.
    pub fn set_token(&self, token: Option<&str>) {
        match token {
            Some(value) if !value.is_empty() => self.backend.write(TOKEN_KEY, value),
            _ => self.backend.delete(TOKEN_KEY),
        }
    }

    /// Stored display name, or `None`.
    pub fn display_name(&self) -> Option<String> {
        self.backend
            .read(DISPLAY_NAME_KEY)
            .filter(|name| !name.is_empty())
    }

    /// Persist the display name. An empty or absent value clears it.
    pub fn set_display_name(&self, name: Option<&str>) {
        match name {
            Some(value) if !value.is_empty() => self.backend.write(DISPLAY_NAME_KEY, value),
            _ => self.backend.delete(DISPLAY_NAME_KEY),
        }
    }

    /// Remove both keys. Logout is the only caller.
    pub fn clear(&self) {
        self.backend.delete(TOKEN_KEY);
        self.backend.delete(DISPLAY_NAME_KEY);
    }

    /// Snapshot for hydrating the app state at startup.
    pub fn snapshot(&self) -> Session {
        Session::new(self.token(), self.display_name())
    }
}

/// In-memory backend for native tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl SessionBackend for MemoryBackend {
    fn read(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBackend::default()))
    }

    #[test]
    fn token_round_trips() {
        let store = store();
        assert_eq!(store.token(), None);
        store.set_token(Some("opaque-credential"));
        assert_eq!(store.token().as_deref(), Some("opaque-credential"));
    }

    #[test]
    fn empty_token_clears_the_stored_one() {
        let store = store();
        store.set_token(Some("opaque-credential"));
        store.set_token(Some(""));
        assert_eq!(store.token(), None);
    }

    #[test]
    fn absent_token_clears_the_stored_one() {
        let store = store();
        store.set_token(Some("opaque-credential"));
        store.set_token(None);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn display_name_round_trips() {
        let store = store();
        store.set_display_name(Some("Priya"));
        assert_eq!(store.display_name().as_deref(), Some("Priya"));
        store.set_display_name(None);
        assert_eq!(store.display_name(), None);
    }

    #[test]
    fn clear_removes_both_keys() {
        let store = store();
        store.set_token(Some("opaque-credential"));
        store.set_display_name(Some("Priya"));
        store.clear();
        assert_eq!(store.token(), None);
        assert_eq!(store.display_name(), None);
    }

    #[test]
    fn snapshot_reflects_stored_state() {
        let store = store();
        store.set_token(Some("opaque-credential"));
        store.set_display_name(Some("Priya"));
        let session = store.snapshot();
        assert!(session.authenticated());
        assert_eq!(session.display_name.as_deref(), Some("Priya"));
    }
}
