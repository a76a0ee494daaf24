//! `themeChanged` as a DOM `CustomEvent` on `window`
//!
//! Scripts that are not part of this module (the 3D structure viewer, for
//! one) listen for the event with `addEventListener`. Rust code on the page
//! can use [`on_theme_changed`] instead.

use crate::js_error;
use gloo_events::EventListener;
use molview_theme_core::{Result, Theme, ThemeChanged, ThemeError};
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit};

/// Dispatch `event_name` on `window` with `detail = { theme }`.
///
/// Listeners run synchronously before this returns.
pub fn dispatch_theme_changed(event_name: &str, change: &ThemeChanged) -> Result<()> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let detail =
        serde_wasm_bindgen::to_value(change).map_err(|e| ThemeError::Event(e.to_string()))?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(event_name, &init)
        .map_err(|e| ThemeError::Event(js_error(&e)))?;

    window
        .dispatch_event(&event)
        .map_err(|e| ThemeError::Event(js_error(&e)))?;
    Ok(())
}

/// Listen for theme changes broadcast on `window`.
///
/// The listener is removed when the returned guard is dropped. Events whose
/// detail does not decode are logged and skipped.
pub fn on_theme_changed<F>(event_name: &str, callback: F) -> Result<EventListener>
where
    F: Fn(Theme) + 'static,
{
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let listener = EventListener::new(&window, event_name.to_owned(), move |event| {
        let Some(event) = event.dyn_ref::<CustomEvent>() else {
            tracing::warn!("theme change event is not a CustomEvent");
            return;
        };
        match serde_wasm_bindgen::from_value::<ThemeChanged>(event.detail()) {
            Ok(change) => callback(change.theme),
            Err(err) => tracing::warn!(%err, "ignoring malformed theme change payload"),
        }
    });
    Ok(listener)
}
