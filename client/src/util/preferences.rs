//! Per-browser display and notification preferences.
//!
//! Stored as JSON under their own slot, separate from the session, so signing
//! out keeps them. The theme is applied as a `data-theme` attribute on
//! `<html>`; outside the browser that step is a no-op.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::config::PREFERENCES_STORAGE_KEY;
use crate::util::storage::SessionStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            email_notifications: true,
            sms_notifications: false,
        }
    }
}

/// Stored preferences, or the defaults when the slot is empty or unreadable.
pub fn load(storage: &dyn SessionStorage) -> Preferences {
    let Some(raw) = storage.load(PREFERENCES_STORAGE_KEY) else {
        return Preferences::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("ignoring unreadable preferences: {err}");
        Preferences::default()
    })
}

pub fn save(storage: &dyn SessionStorage, prefs: Preferences) {
    match serde_json::to_string(&prefs) {
        Ok(raw) => storage.save(PREFERENCES_STORAGE_KEY, &raw),
        Err(err) => log::warn!("preferences not saved: {err}"),
    }
}

/// Set the `data-theme` attribute on the document element.
pub fn apply_theme(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}
