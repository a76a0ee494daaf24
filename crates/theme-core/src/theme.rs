//! Theme values and the explicit theme state

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Value written to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme implied by the presence of the dark marker on the document root
    pub fn from_marker(dark_marker: bool) -> Self {
        if dark_marker {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Lenient conversion: only the exact string `"dark"` selects the dark theme.
impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The theme a page is in, passed through the pure render step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The only transition of the two-state machine
    pub fn toggled(self) -> Self {
        Self {
            theme: self.theme.toggle(),
        }
    }
}
