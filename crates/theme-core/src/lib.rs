//! Light/dark theme handling for molview pages, independent of the browser.

pub mod bus;
pub mod config;
pub mod controller;
pub mod error;
pub mod ports;
pub mod render;
pub mod theme;

#[cfg(test)]
mod testing;


pub use bus::{SubscriptionId, ThemeBus, ThemeChanged};
pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{Result, ThemeError};
pub use ports::{MemoryStore, PreferenceStore, ThemeSurface};
pub use render::{render, RenderPlan};
pub use theme::{Theme, ThemeState};
