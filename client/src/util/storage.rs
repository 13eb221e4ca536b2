//! Key/value storage backends for the persisted session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes through a `SessionStorage` handle instead of
//! touching `localStorage` directly, so the same store runs in the browser,
//! during SSR (where nothing is persisted), and in unit tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// Raw string storage keyed by slot name. Writes are best-effort.
pub trait SessionStorage: Send + Sync + fmt::Debug {
    /// Read the raw value stored under `key`.
    fn load(&self, key: &str) -> Option<String>;
    /// Replace the value stored under `key`.
    fn save(&self, key: &str, raw: &str);
    /// Drop the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// Browser `window.localStorage`. Every operation is a no-op outside the
/// browser, which makes it safe to construct during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, raw).is_err() {
                log::warn!("localStorage write rejected for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Used by tests to simulate a page reload: build a
/// second store over the same `MemoryStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one slot.
    pub fn with_slot(key: &str, raw: &str) -> Self {
        let storage = Self::new();
        storage.save(key, raw);
        storage
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, raw: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), raw.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}
