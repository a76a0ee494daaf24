//! Browser side of the molview theme toggle.
//!
//! Binds [`molview_theme_core::ThemeController`] to `localStorage`, the
//! live document and `window` events, and exposes it to page scripts.

pub mod events;
pub mod exports;
pub mod hooks;
pub mod install;
pub mod logging;
pub mod storage;
pub mod surface;


pub use events::{dispatch_theme_changed, on_theme_changed};
pub use hooks::use_theme;
pub use install::{
    attach, build_controller, current_theme, install, installed, BrowserController,
};
pub use logging::init_logging;
pub use molview_theme_core::{
    PreferenceStore, Theme, ThemeChanged, ThemeConfig, ThemeError, ThemeSurface,
};
pub use storage::{BrowserStore, LocalStore};
pub use surface::DocumentSurface;

use wasm_bindgen::{JsCast, JsValue};

/// Message of a thrown JS value
pub(crate) fn js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
