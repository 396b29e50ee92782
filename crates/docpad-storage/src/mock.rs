//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::document::Documentation;
use crate::storage::{Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Holds the entry as a JSON string, like a browser's local storage, so
/// values go through the same serialization as the real backends.
///
/// # Example
///
/// ```ignore
/// use docpad_storage::{Documentation, MockStorage, Page, Storage};
///
/// let storage = MockStorage::new()
///     .with_documentation(&Documentation::new(vec![Page::new("A", "alpha")]));
///
/// assert_eq!(storage.get().unwrap().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    raw: RwLock<Option<String>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the entry with a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_documentation(self, documentation: &Documentation) -> Self {
        *self.raw.write().unwrap() = Some(documentation.to_json().unwrap());
        self
    }

    /// Seed the entry with raw text, valid JSON or not.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_raw(self, raw: impl Into<String>) -> Self {
        *self.raw.write().unwrap() = Some(raw.into());
        self
    }

    /// Make every subsequent `set` fail with [`StorageErrorKind::Unavailable`].
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored JSON, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.read().unwrap().clone()
    }

    /// Number of successful `set` calls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Storage for MockStorage {
    fn get(&self) -> Result<Option<Documentation>, StorageError> {
        let raw = self.raw.read().unwrap();
        raw.as_deref()
            .map(|json| {
                Documentation::from_json(json)
                    .map_err(|e| StorageError::invalid_data(e).with_backend(BACKEND))
            })
            .transpose()
    }

    fn set(&self, documentation: &Documentation) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::Unavailable).with_backend(BACKEND));
        }
        let json = documentation
            .to_json()
            .map_err(|e| StorageError::invalid_data(e).with_backend(BACKEND))?;
        *self.raw.write().unwrap() = Some(json);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;

    #[test]
    fn test_empty_mock_returns_none() {
        assert!(MockStorage::new().get().unwrap().is_none());
    }

    #[test]
    fn test_with_documentation() {
        let doc = Documentation::new(vec![Page::new("A", "alpha")]);
        let storage = MockStorage::new().with_documentation(&doc);

        assert_eq!(storage.get().unwrap(), Some(doc));
    }

    #[test]
    fn test_with_raw_corrupt() {
        let storage = MockStorage::new().with_raw("{oops");

        let err = storage.get().unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidData);
    }

    #[test]
    fn test_set_counts_writes() {
        let storage = MockStorage::new();
        storage.set(&Documentation::default()).unwrap();
        storage.set(&Documentation::default()).unwrap();

        assert_eq!(storage.write_count(), 2);
        assert_eq!(storage.raw().as_deref(), Some(r#"{"Pages":[]}"#));
    }

    #[test]
    fn test_fail_writes() {
        let storage = MockStorage::new();
        storage.fail_writes(true);

        let err = storage.set(&Documentation::default()).unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::Unavailable);
        assert_eq!(storage.write_count(), 0);
        assert!(storage.raw().is_none());
    }
}
