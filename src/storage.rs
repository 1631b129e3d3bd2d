//! Session persistence backends.
//!
//! The session is persisted as two independent string entries — the raw
//! token and the JSON-serialized user record — written and removed as a
//! pair. The backend is injected into the session store rather than
//! looked up globally, so the persistence semantics test natively
//! against the in-memory implementation.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Storage key for the raw session token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// String key-value storage for session persistence.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// `window.localStorage`-backed storage.
///
/// Inert outside the browser build: reads return `None` and writes are
/// dropped, so native builds compile without a DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        #[cfg(feature = "csr")]
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// HashMap-backed storage for tests and non-browser embeddings.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
