//! Session Store
//!
//! Owns the persisted bearer token and keeps the gateway's authorization
//! header in step with it.

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::ApiClient;

/// Persistent slot for the token
pub trait TokenStore {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn clear(&self);
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, token: &str) {
        (**self).write(token)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

// ========================
// Browser localStorage
// ========================

pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Whether `window.localStorage` can be reached at all
    pub fn is_available() -> bool {
        Self::storage().is_some()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserStorage {
    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn write(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[SESSION] localStorage unavailable, token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(&self.key, token) {
            log::warn!("[SESSION] failed to persist token: {:?}", e);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(&self.key) {
                log::warn!("[SESSION] failed to clear token: {:?}", e);
            }
        }
    }
}

/// Process-local fallback when localStorage is blocked
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryStorage {
    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

// ========================
// Session
// ========================

pub struct SessionStore {
    storage: Box<dyn TokenStore>,
    api: Rc<ApiClient>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn TokenStore>, api: Rc<ApiClient>) -> Self {
        Self { storage, api }
    }

    /// Token persisted by an earlier visit. Not validated against the server.
    pub fn load(&self) -> Option<String> {
        self.storage.read().filter(|token| !token.is_empty())
    }

    pub fn login(&self, token: &str) {
        self.storage.write(token);
        self.api.set_bearer_token(token);
        log::info!("[SESSION] logged in");
    }

    pub fn logout(&self) {
        self.storage.clear();
        self.api.clear_authorization();
        log::info!("[SESSION] logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.authorization().is_some()
    }
}
