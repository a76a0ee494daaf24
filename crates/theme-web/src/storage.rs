//! Preference store backed by `window.localStorage`

use crate::js_error;
use molview_theme_core::{MemoryStore, PreferenceStore, Result, ThemeError};
use web_sys::Storage;

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_error(&e)))?
            .ok_or(ThemeError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_error(&e)))
    }
}

/// Local storage when the browser allows it, otherwise a store that only
/// lasts for the current page
pub enum BrowserStore {
    Local(LocalStore),
    Ephemeral(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStore::new() {
            Ok(store) => Self::Local(store),
            Err(err) => {
                tracing::warn!(%err, "theme preference will not survive a reload");
                Self::Ephemeral(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::Local(store) => store.load(key),
            Self::Ephemeral(store) => store.load(key),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Local(store) => store.save(key, value),
            Self::Ephemeral(store) => store.save(key, value),
        }
    }
}
