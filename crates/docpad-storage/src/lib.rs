//! Documentation model and storage port for docpad.
//!
//! This crate owns the two value types every other docpad crate passes around,
//! [`Page`] and [`Documentation`], and the [`Storage`] trait the controller uses
//! to persist them. Keeping persistence behind a trait enables:
//!
//! - **Unit testing** the controller without a real storage backend
//! - **Backend flexibility** (a JSON file today, anything keyed tomorrow)
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Documentation`] / [`Page`] with the exact wire format (`Pages`, `bodyText`)
//! - [`Storage`] trait with `get()` and `set()`
//! - [`FsStorage`] storing the entry as `<dir>/documentation.json`
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docpad_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new(PathBuf::from(".docpad"));
//! if let Some(doc) = storage.get()? {
//!     for page in &doc.pages {
//!         println!("{}", page.title);
//!     }
//! }
//! ```

mod document;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use document::{Documentation, Page};
pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{STORAGE_KEY, Storage, StorageError, StorageErrorKind};
