//! Documentation viewer/editor core.
//!
//! Everything the viewer does, independent of how it is displayed:
//!
//! - [`Controller`]: owns the loaded [`Documentation`], fetches new documents,
//!   saves edits, exports, and keeps the route pointing at an existing page
//! - [`PageEditor`]: display/edit state machine for one page
//! - [`sidebar_items`]: navigation links for the sidebar
//! - [`PageForm`] / [`ValidationRules`]: field-level validation of edits
//! - [`is_valid_url`]: syntactic check of user-entered document URLs
//!
//! # Architecture
//!
//! ```text
//! App shell ──► Controller ──► Sidebar (navigate)
//!                  │      └──► PageEditor (display / edit)
//!                  │                 │
//!                  │◄──── save ──────┘
//!                  ├──► Storage (docpad-storage)
//!                  └──► DocumentSource (HTTP GET)
//! ```
//!
//! The controller talks to persistence and the network only through the
//! [`Storage`](docpad_storage::Storage) and [`DocumentSource`] traits, so it
//! is fully testable with in-memory doubles (feature `mock`).
//!
//! [`Documentation`]: docpad_storage::Documentation

mod controller;
mod editor;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod route;
mod sidebar;
mod source;
mod url;
mod validation;

pub use controller::{
    Controller, EXPORT_FILE_NAME, Export, FETCH_FAILED_MESSAGE, INVALID_URL_MESSAGE,
};
pub use editor::{EditorMode, PageEditor};
pub use error::{FetchError, ViewerError};
#[cfg(any(test, feature = "mock"))]
pub use mock::StaticSource;
pub use route::{RouteDecision, find_page, page_path, reconcile_route, title_from_path};
pub use sidebar::{MAX_LABEL_CHARS, SidebarItem, sidebar_items, truncate_title};
pub use source::{DEFAULT_TIMEOUT, DocumentSource, HttpSource};
pub use url::{fetch_url, is_valid_url};
pub use validation::{
    BODY_REQUIRED, Field, FieldErrors, PageForm, TITLE_NOT_UNIQUE, TITLE_REQUIRED,
    ValidationRules,
};
