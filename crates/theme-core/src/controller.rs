//! Theme controller
//!
//! Owns the decision logic of the toggle: which theme is active, what the
//! page must show for it, and who gets told when it changes. The store and
//! the surface do the actual I/O.

use crate::bus::{SubscriptionId, ThemeBus, ThemeChanged};
use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::ports::{PreferenceStore, ThemeSurface};
use crate::render::render;
use crate::theme::{Theme, ThemeState};

#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    surface: D,
    config: ThemeConfig,
    bus: ThemeBus,
}

impl<S, D> ThemeController<S, D>
where
    S: PreferenceStore,
    D: ThemeSurface,
{
    pub fn new(store: S, surface: D, config: ThemeConfig) -> Self {
        Self {
            store,
            surface,
            config,
            bus: ThemeBus::new(),
        }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn bus(&self) -> &ThemeBus {
        &self.bus
    }

    pub fn subscribe(&self, callback: impl Fn(&ThemeChanged) + 'static) -> SubscriptionId {
        self.bus.subscribe(callback)
    }

    /// Set or clear the dark marker and update the toggle glyph.
    ///
    /// Does not persist anything. A missing toggle button is not an error.
    pub fn apply_theme(&self, theme: Theme) -> Result<()> {
        let plan = render(ThemeState::new(theme), &self.config);
        self.surface
            .set_marker(&self.config.dark_class, plan.dark_marker)?;
        if !self
            .surface
            .set_toggle_glyph(&self.config.toggle_id, plan.glyph)
        {
            tracing::trace!(toggle_id = %self.config.toggle_id, "toggle not on page, glyph skipped");
        }
        Ok(())
    }

    /// Apply a theme given by name; anything but `"dark"` is light.
    pub fn apply_theme_str(&self, theme: &str) -> Result<()> {
        self.apply_theme(Theme::from(theme))
    }

    /// Theme shown by the page right now, read from the marker
    pub fn current_theme(&self) -> Theme {
        Theme::from_marker(self.surface.has_marker(&self.config.dark_class))
    }

    /// Persisted preference, light when unset or unreadable
    pub fn stored_theme(&self) -> Theme {
        match self.store.load(&self.config.storage_key) {
            Ok(Some(value)) => Theme::from(value.as_str()),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(%err, "could not read theme preference, using default");
                Theme::default()
            }
        }
    }

    /// Bring the page in line with the persisted preference.
    ///
    /// Both the marker and the glyph are written so they agree with the
    /// store as soon as the page is ready.
    pub fn init(&self) -> Result<Theme> {
        let theme = self.stored_theme();
        self.apply_theme(theme)?;
        tracing::debug!(%theme, "theme initialized");
        Ok(theme)
    }

    /// Whether a click handler can be attached.
    ///
    /// A missing toggle is tolerated unless the configuration requires it.
    pub fn check_toggle(&self) -> Result<bool> {
        if self.surface.has_toggle(&self.config.toggle_id) {
            return Ok(true);
        }
        if self.config.require_toggle {
            return Err(ThemeError::ToggleMissing(self.config.toggle_id.clone()));
        }
        tracing::warn!(toggle_id = %self.config.toggle_id, "toggle not found, click handler not registered");
        Ok(false)
    }

    /// Click handler: flip, apply, persist, then notify subscribers.
    ///
    /// The preference is only written once the page shows the new theme, so
    /// a failing DOM call leaves the store untouched.
    pub fn toggle(&self) -> Result<Theme> {
        let state = ThemeState::new(self.current_theme()).toggled();
        let theme = state.theme;

        self.apply_theme(theme)?;
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            tracing::warn!(%err, %theme, "could not persist theme preference");
        }
        tracing::debug!(%theme, "theme toggled");

        self.bus.publish(&ThemeChanged { theme });
        Ok(theme)
    }
}
