//! Session credential and its storage

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Storage keys shared with the browser session storage
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const USERNAME: &str = "username";
    pub const ROLE: &str = "role";
}

/// Role identifiers used in route permission lists
pub mod roles {
    pub const ADMIN: &str = "ADMIN";
    pub const USER: &str = "USER";
}

/// String key/value storage with the shape of the web `Storage` API, so a
/// browser adapter can sit behind it and tests can use [`MemoryStore`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The current session credential, passed explicitly to the guard.
///
/// Fields mirror the three independent storage keys and can be absent
/// independently; a concurrent login in another tab may leave them
/// momentarily inconsistent, and no ordering is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
}

impl Session {
    /// An unauthenticated session with no credential at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A fully populated credential, as produced by a successful login
    pub fn authenticated(
        token: impl Into<String>,
        username: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            token: Some(token.into()),
            username: Some(username.into()),
            role: Some(role.into()),
        }
    }

    /// Read the credential out of a store
    pub fn load(store: &impl SessionStore) -> Self {
        Self {
            token: store.get(keys::TOKEN),
            username: store.get(keys::USERNAME),
            role: store.get(keys::ROLE),
        }
    }

    /// Write the credential into a store, removing absent fields
    pub fn persist(&self, store: &impl SessionStore) {
        for (key, value) in [
            (keys::TOKEN, &self.token),
            (keys::USERNAME, &self.username),
            (keys::ROLE, &self.role),
        ] {
            match value {
                Some(value) => store.set(key, value),
                None => store.remove(key),
            }
        }
    }

    /// Drop the credential from a store, e.g. at logout
    pub fn clear(store: &impl SessionStore) {
        store.remove(keys::TOKEN);
        store.remove(keys::USERNAME);
        store.remove(keys::ROLE);
    }

    /// Whether a usable token is held. An empty string counts as absent,
    /// matching how the browser storefront treats a falsy storage value.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// In-memory [`SessionStore`] for native callers and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("Failed to acquire session store lock")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("Failed to acquire session store lock")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .expect("Failed to acquire session store lock")
            .remove(key);
    }
}
