//! Error types for theme handling

use thiserror::Error;

/// Result type alias for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors that can occur while reading, applying or broadcasting a theme
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// No global `window` (e.g. running inside a worker)
    #[error("no window object available")]
    NoWindow,

    /// The window has no document
    #[error("no document available")]
    NoDocument,

    /// Local storage is disabled or blocked for this origin
    #[error("local storage is unavailable")]
    StorageUnavailable,

    /// Reading or writing the preference threw
    #[error("storage error: {0}")]
    Storage(String),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),

    /// Building or dispatching the change event failed
    #[error("event error: {0}")]
    Event(String),

    /// The toggle button is required but not present
    #[error("toggle element #{0} not found")]
    ToggleMissing(String),

    /// The page already runs a toggle installed with other settings
    #[error("theme toggle already installed with a different configuration")]
    AlreadyInstalled,
}
