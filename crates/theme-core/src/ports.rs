//! Seams between the controller and the host page

use crate::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;

/// Durable key-value store holding the preference
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

/// The document root marker and the toggle button
pub trait ThemeSurface {
    fn has_marker(&self, class: &str) -> bool;

    fn set_marker(&self, class: &str, present: bool) -> Result<()>;

    /// Returns `false` when the toggle element does not exist
    fn set_toggle_glyph(&self, toggle_id: &str, glyph: &str) -> bool;

    fn has_toggle(&self, toggle_id: &str) -> bool;
}

/// Store that forgets everything on reload.
///
/// Used when the browser refuses local storage, and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
