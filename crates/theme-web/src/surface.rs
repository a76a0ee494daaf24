//! The live document as a theme surface

use crate::js_error;
use molview_theme_core::{Result, ThemeError, ThemeSurface};
use web_sys::{Document, Element};

pub struct DocumentSurface {
    document: Document,
}

impl DocumentSurface {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn toggle(&self, toggle_id: &str) -> Option<Element> {
        self.document.get_element_by_id(toggle_id)
    }
}

impl ThemeSurface for DocumentSurface {
    fn has_marker(&self, class: &str) -> bool {
        self.document
            .document_element()
            .is_some_and(|root| root.class_list().contains(class))
    }

    fn set_marker(&self, class: &str, present: bool) -> Result<()> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))?;
        let class_list = root.class_list();
        let result = if present {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
        result.map_err(|e| ThemeError::Dom(js_error(&e)))
    }

    fn set_toggle_glyph(&self, toggle_id: &str, glyph: &str) -> bool {
        match self.toggle(toggle_id) {
            Some(button) => {
                button.set_text_content(Some(glyph));
                true
            }
            None => false,
        }
    }

    fn has_toggle(&self, toggle_id: &str) -> bool {
        self.toggle(toggle_id).is_some()
    }
}
