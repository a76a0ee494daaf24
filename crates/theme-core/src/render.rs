//! Pure mapping from theme state to what the page must show

use crate::config::ThemeConfig;
use crate::theme::ThemeState;

/// Instructions for the surface adapter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderPlan<'a> {
    pub dark_marker: bool,
    pub glyph: &'a str,
}

pub fn render(state: ThemeState, config: &ThemeConfig) -> RenderPlan<'_> {
    if state.theme.is_dark() {
        RenderPlan {
            dark_marker: true,
            glyph: &config.dark_glyph,
        }
    } else {
        RenderPlan {
            dark_marker: false,
            glyph: &config.light_glyph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_dark_sets_marker_and_sun() {
        let config = ThemeConfig::default();
        let plan = render(ThemeState::new(Theme::Dark), &config);
        assert!(plan.dark_marker);
        assert_eq!(plan.glyph, "☀️");
    }

    #[test]
    fn test_everything_else_renders_light() {
        let config = ThemeConfig::default();
        for value in ["light", "", "sepia", "Dark"] {
            let plan = render(ThemeState::new(Theme::from(value)), &config);
            assert!(!plan.dark_marker, "{value:?}");
            assert_eq!(plan.glyph, "🌙", "{value:?}");
        }
    }

    #[test]
    fn test_uses_configured_glyphs() {
        let config = ThemeConfig {
            dark_glyph: "light".into(),
            light_glyph: "dark".into(),
            ..ThemeConfig::default()
        };
        assert_eq!(render(ThemeState::new(Theme::Dark), &config).glyph, "light");
        assert_eq!(render(ThemeState::default(), &config).glyph, "dark");
    }
}
