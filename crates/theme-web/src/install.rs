//! Attaching the controller to the page once the DOM is ready

use crate::events::dispatch_theme_changed;
use crate::storage::BrowserStore;
use crate::surface::DocumentSurface;
use gloo_events::EventListener;
use molview_theme_core::{
    Result, Theme, ThemeConfig, ThemeController, ThemeError, ThemeSurface,
};
use std::cell::RefCell;
use std::rc::Rc;

pub type BrowserController = ThemeController<BrowserStore, DocumentSurface>;

struct Installation {
    controller: Rc<BrowserController>,
    // Dropping a listener unregisters it
    listeners: Vec<EventListener>,
}

thread_local! {
    static INSTALLED: RefCell<Option<Installation>> = const { RefCell::new(None) };
}

/// Controller over `localStorage` and the current document that also
/// re-broadcasts every change as a `window` event.
pub fn build_controller(config: ThemeConfig) -> Result<BrowserController> {
    let surface = DocumentSurface::new()?;
    let controller = ThemeController::new(BrowserStore::open(), surface, config);

    let event_name = controller.config().event_name.clone();
    controller.subscribe(move |change| {
        if let Err(err) = dispatch_theme_changed(&event_name, change) {
            tracing::error!(%err, "failed to broadcast theme change");
        }
    });
    Ok(controller)
}

/// Install the toggle on this page.
///
/// Runs immediately if the document has finished parsing, otherwise on
/// `DOMContentLoaded`. Errors raised after a deferred start are logged.
/// Installing again with the same configuration does nothing; a different
/// configuration cannot be honoured any more and is rejected.
pub fn install(config: ThemeConfig) -> Result<()> {
    if let Some(existing) = installed() {
        if existing.config() == &config {
            tracing::debug!("theme toggle already installed");
            return Ok(());
        }
        tracing::warn!("theme toggle already installed, new configuration ignored");
        return Err(ThemeError::AlreadyInstalled);
    }

    let controller = Rc::new(build_controller(config)?);
    let document = controller.surface().document().clone();
    let mut listeners = Vec::new();

    if document.ready_state() == "loading" {
        let ready = Rc::clone(&controller);
        listeners.push(EventListener::once(&document, "DOMContentLoaded", move |_| {
            match attach(&ready) {
                Ok(Some(click)) => INSTALLED.with(|slot| {
                    if let Some(installation) = slot.borrow_mut().as_mut() {
                        installation.listeners.push(click);
                    }
                }),
                Ok(None) => {}
                Err(err) => tracing::error!(%err, "theme toggle setup failed"),
            }
        }));
    } else if let Some(click) = attach(&controller)? {
        listeners.push(click);
    }

    INSTALLED.with(|slot| {
        *slot.borrow_mut() = Some(Installation {
            controller,
            listeners,
        });
    });
    Ok(())
}

/// Sync the page with the stored preference and bind the click handler.
///
/// Returns `None` when there is no toggle to bind to. The handler stays
/// registered for as long as the returned listener is kept.
pub fn attach(controller: &Rc<BrowserController>) -> Result<Option<EventListener>> {
    controller.init()?;
    if !controller.check_toggle()? {
        return Ok(None);
    }
    let Some(button) = controller
        .surface()
        .toggle(&controller.config().toggle_id)
    else {
        return Ok(None);
    };

    let clicked = Rc::clone(controller);
    let listener = EventListener::new(&button, "click", move |_| {
        if let Err(err) = clicked.toggle() {
            tracing::error!(%err, "theme toggle failed");
        }
    });
    tracing::debug!(toggle_id = %controller.config().toggle_id, "theme toggle attached");
    Ok(Some(listener))
}

/// The installed controller, if any
pub fn installed() -> Option<Rc<BrowserController>> {
    INSTALLED.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|installation| Rc::clone(&installation.controller))
    })
}

/// The installed controller, or a default one for calls made before
/// installation (e.g. from an inline script in `<head>`)
pub fn controller() -> Result<Rc<BrowserController>> {
    match installed() {
        Some(controller) => Ok(controller),
        None => build_controller(ThemeConfig::default()).map(Rc::new),
    }
}

/// Theme shown by the page, read from the document root marker
pub fn current_theme() -> Theme {
    if let Some(controller) = installed() {
        return controller.current_theme();
    }
    DocumentSurface::new()
        .map(|surface| Theme::from_marker(surface.has_marker(ThemeConfig::DARK_CLASS)))
        .unwrap_or_default()
}

/// Name of the change event on this page
pub fn event_name() -> String {
    installed().map_or_else(
        || ThemeConfig::EVENT_NAME.to_string(),
        |controller| controller.config().event_name.clone(),
    )
}
