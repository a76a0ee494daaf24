//! Yew hook for widgets that restyle with the page theme

use crate::events::on_theme_changed;
use crate::install::{current_theme, event_name};
use molview_theme_core::Theme;
use yew::prelude::*;

/// Current page theme, re-rendering on every theme change broadcast
#[hook]
pub fn use_theme() -> Theme {
    let theme = use_state(current_theme);

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = match on_theme_changed(&event_name(), move |next| theme.set(next)) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    tracing::warn!(%err, "cannot follow theme changes");
                    None
                }
            };
            move || drop(listener)
        });
    }

    *theme
}
