//! Theme toggle configuration

use serde::Deserialize;

/// Names and glyphs the toggle works with.
///
/// Every field falls back to its default when missing, so a page can
/// override a single name with a partial object.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Key of the persisted preference
    pub storage_key: String,
    /// Element id of the toggle button
    pub toggle_id: String,
    /// Class token set on the document root while dark mode is active
    pub dark_class: String,
    /// Name of the event broadcast after a toggle
    pub event_name: String,
    /// Button glyph while dark mode is active
    pub dark_glyph: String,
    /// Button glyph while light mode is active
    pub light_glyph: String,
    /// Fail installation when the toggle button is missing instead of
    /// skipping the click handler
    pub require_toggle: bool,
}

impl ThemeConfig {
    pub const STORAGE_KEY: &'static str = "theme";
    pub const TOGGLE_ID: &'static str = "theme-toggle";
    pub const DARK_CLASS: &'static str = "dark-mode";
    pub const EVENT_NAME: &'static str = "themeChanged";
    pub const DARK_GLYPH: &'static str = "☀️";
    pub const LIGHT_GLYPH: &'static str = "🌙";
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::STORAGE_KEY.to_string(),
            toggle_id: Self::TOGGLE_ID.to_string(),
            dark_class: Self::DARK_CLASS.to_string(),
            event_name: Self::EVENT_NAME.to_string(),
            dark_glyph: Self::DARK_GLYPH.to_string(),
            light_glyph: Self::LIGHT_GLYPH.to_string(),
            require_toggle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.toggle_id, "theme-toggle");
        assert_eq!(config.dark_class, "dark-mode");
        assert_eq!(config.event_name, "themeChanged");
        assert_eq!(config.dark_glyph, "☀️");
        assert_eq!(config.light_glyph, "🌙");
        assert!(!config.require_toggle);
    }

    #[test]
    fn test_partial_override() {
        let config: ThemeConfig =
            serde_json::from_str(r#"{"toggleId":"viewer-theme","requireToggle":true}"#).unwrap();
        assert_eq!(config.toggle_id, "viewer-theme");
        assert!(config.require_toggle);
        assert_eq!(config.storage_key, ThemeConfig::STORAGE_KEY);
        assert_eq!(config.event_name, ThemeConfig::EVENT_NAME);
    }
}
