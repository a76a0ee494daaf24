//! In-memory page stand-ins for exercising the controller off-browser

use crate::error::{Result, ThemeError};
use crate::ports::{PreferenceStore, ThemeSurface};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

/// A document root class list plus a set of text elements keyed by id
#[derive(Debug, Default)]
pub struct MemorySurface {
    classes: RefCell<BTreeSet<String>>,
    elements: RefCell<HashMap<String, String>>,
    reject_marker: Cell<bool>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page that already has the toggle button, showing `text`
    pub fn with_toggle(toggle_id: &str, text: &str) -> Self {
        let surface = Self::new();
        surface.insert_element(toggle_id, text);
        surface
    }

    pub fn insert_element(&self, id: &str, text: &str) {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), text.to_string());
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).cloned()
    }

    pub fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// Make every later marker write fail, like a detached document
    pub fn reject_marker_writes(&self) {
        self.reject_marker.set(true);
    }
}

impl ThemeSurface for MemorySurface {
    fn has_marker(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn set_marker(&self, class: &str, present: bool) -> Result<()> {
        if self.reject_marker.get() {
            return Err(ThemeError::Dom("InvalidStateError".to_string()));
        }
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn set_toggle_glyph(&self, toggle_id: &str, glyph: &str) -> bool {
        match self.elements.borrow_mut().get_mut(toggle_id) {
            Some(text) => {
                *text = glyph.to_string();
                true
            }
            None => false,
        }
    }

    fn has_toggle(&self, toggle_id: &str) -> bool {
        self.elements.borrow().contains_key(toggle_id)
    }
}

/// A store whose reads and writes always throw, like local storage in
/// some private browsing modes
#[derive(Debug, Default)]
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Result<Option<String>> {
        Err(ThemeError::Storage("SecurityError: access denied".to_string()))
    }

    fn save(&self, _key: &str, _value: &str) -> Result<()> {
        Err(ThemeError::Storage("QuotaExceededError".to_string()))
    }
}
