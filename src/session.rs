//! Session and Guard
//!
//! The stored credential and the route gate that depends on it. The session is
//! an explicit object handed to the API client, never looked up ambiently.

use std::rc::Rc;

use log::{info, warn};

use crate::config::TOKEN_STORAGE_KEY;
use crate::routes::Route;

/// Persistent home of the bearer token
pub trait CredentialStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    /// `false` when the token could not be removed
    fn clear(&self) -> bool;
}

/// Browser `localStorage`
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    warn!("Failed to persist token under {}", self.key);
                }
            }
            None => warn!("localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) -> bool {
        match Self::storage() {
            Some(storage) => {
                let removed = storage.remove_item(&self.key).is_ok();
                if !removed {
                    warn!("Failed to remove token under {}", self.key);
                }
                removed
            }
            None => {
                warn!("localStorage unavailable, token not removed");
                false
            }
        }
    }
}

/// In-process store for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    token: std::cell::RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: std::cell::RefCell::new(Some(token.to_string())) }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) -> bool {
        *self.token.borrow_mut() = None;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Authenticated,
    Unauthenticated,
}

/// Handle on the single stored credential
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(LocalStorageStore::new(TOKEN_STORAGE_KEY)))
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::default()))
    }

    /// Current token; an empty string counts as absent
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    /// Replaces any previous token
    pub fn store_token(&self, token: &str) {
        self.store.save(token);
        info!("Session started");
    }

    /// Drop the credential. Returns whether the store actually let go of it.
    pub fn clear(&self) -> bool {
        let cleared = self.store.clear();
        if cleared {
            info!("Session cleared");
        } else {
            warn!("Session could not be cleared");
        }
        cleared
    }

    pub fn state(&self) -> SessionState {
        if self.token().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }
}

/// Route to actually render. Protected routes fall back to login when no
/// credential is stored; a present token is trusted until a call rejects it.
pub fn guard(requested: Route, state: SessionState) -> Route {
    match state {
        SessionState::Unauthenticated if requested.is_protected() => Route::Login,
        _ => requested,
    }
}
