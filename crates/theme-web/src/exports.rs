//! Functions callable from page scripts

use crate::install::{self, controller};
use molview_theme_core::ThemeConfig;
use wasm_bindgen::prelude::*;

/// `applyTheme("dark" | "light")`: set the marker and glyph without
/// persisting. Any other value is treated as light.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(theme: &str) {
    if let Err(err) = controller().and_then(|controller| controller.apply_theme_str(theme)) {
        tracing::error!(%err, theme, "applyTheme failed");
    }
}

/// `toggleTheme()`: same as clicking the toggle; returns the new theme.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsError> {
    let theme = controller()?.toggle()?;
    Ok(theme.as_str().to_string())
}

#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> String {
    install::current_theme().as_str().to_string()
}

/// `installWithConfig({ toggleId: "viewer-theme" })`: install with some
/// names overridden.
///
/// Throws when the toggle is already installed with other names, which is
/// the case after autostart unless the `autostart` feature is disabled.
#[wasm_bindgen(js_name = installWithConfig)]
pub fn install_with_config(config: JsValue) -> Result<(), JsError> {
    install::install(config_from_js(config)?)?;
    Ok(())
}

/// `undefined`/`null` mean the default names; objects may be partial.
pub(crate) fn config_from_js(
    value: JsValue,
) -> Result<ThemeConfig, serde_wasm_bindgen::Error> {
    if value.is_undefined() || value.is_null() {
        return Ok(ThemeConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
}

#[cfg(all(feature = "autostart", not(test)))]
#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init_logging();
    if let Err(err) = install::install(ThemeConfig::default()) {
        tracing::error!(%err, "theme toggle not installed");
    }
}
