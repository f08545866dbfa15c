//! Key-Value Storage
//!
//! Abstract storage area plus the browser and in-memory implementations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{WishError, WishResult};

/// Durable string key-value area
pub trait KeyValueStore {
    fn get(&self, key: &str) -> WishResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> WishResult<()>;
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open local storage; fails in contexts where the browser denies access
    pub fn open() -> WishResult<Self> {
        let window = web_sys::window().ok_or_else(|| WishError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| WishError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| WishError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> WishResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WishError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> WishResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WishError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    #[cfg(test)]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> WishResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> WishResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
