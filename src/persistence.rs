//! Persistence Bridge
//!
//! Loads and saves the whole wish list as one JSON snapshot under a single key.

use crate::error::WishResult;
use crate::models::WishItem;
use crate::storage::KeyValueStore;

/// The one key the snapshot lives under
pub const WISHES_KEY: &str = "wishes";

pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the snapshot. Absent, unreadable or malformed snapshots yield an empty list.
    pub fn load(&self) -> Vec<WishItem> {
        match self.try_load() {
            Ok(Some(items)) => {
                log::info!("loaded {} wishes from '{}'", items.len(), WISHES_KEY);
                items
            }
            Ok(None) => {
                log::info!("no wishes stored under '{}', list empty", WISHES_KEY);
                Vec::new()
            }
            Err(e) => {
                log::warn!("discarding stored wishes under '{}': {}", WISHES_KEY, e);
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> WishResult<Option<Vec<WishItem>>> {
        match self.store.get(WISHES_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the snapshot with the full list
    pub fn save(&self, items: &[WishItem]) -> WishResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(WISHES_KEY, &raw)?;
        log::debug!("saved {} wishes to '{}'", items.len(), WISHES_KEY);
        Ok(())
    }
}
