//! Application state.
//!
//! Shared state for all request handlers.

use docpad_viewer::Controller;
use tokio::sync::Mutex;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Viewer controller. Handlers never hold the lock across network I/O.
    pub(crate) controller: Mutex<Controller>,
    /// Application version (stylesheet cache busting and export `ETag`).
    pub(crate) version: String,
}

impl AppState {
    pub(crate) fn new(controller: Controller, version: impl Into<String>) -> Self {
        Self {
            controller: Mutex::new(controller),
            version: version.into(),
        }
    }
}
