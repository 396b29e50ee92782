//! Filesystem storage backend.
//!
//! Stores the document as `{dir}/documentation.json`. Writes go through a
//! temporary file in the same directory followed by a rename, so readers
//! never observe a half-written entry.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::Documentation;
use crate::storage::{STORAGE_KEY, Storage, StorageError};

const BACKEND: &str = "Fs";

/// File-backed [`Storage`] rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct FsStorage {
    dir: PathBuf,
    path: PathBuf,
}

impl FsStorage {
    /// Create storage in `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        let path = dir.join(format!("{STORAGE_KEY}.json"));
        Self { dir, path }
    }

    /// Path of the entry file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FsStorage {
    fn get(&self) -> Result<Option<Documentation>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::io(e, Some(self.path.clone())).with_backend(BACKEND));
            }
        };

        let documentation = Documentation::from_json(&content).map_err(|e| {
            StorageError::invalid_data(e)
                .with_path(&self.path)
                .with_backend(BACKEND)
        })?;

        tracing::debug!(path = %self.path.display(), pages = documentation.len(), "Read documentation");
        Ok(Some(documentation))
    }

    fn set(&self, documentation: &Documentation) -> Result<(), StorageError> {
        let json = documentation.to_json().map_err(|e| {
            StorageError::invalid_data(e)
                .with_path(&self.path)
                .with_backend(BACKEND)
        })?;

        let io_err = |e: std::io::Error, path: &Path| {
            StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND)
        };

        std::fs::create_dir_all(&self.dir).map_err(|e| io_err(e, &self.dir))?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(&self.dir).map_err(|e| io_err(e, &self.dir))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| io_err(e, tmp.path()))?;
        tmp.persist(&self.path)
            .map_err(|e| io_err(e.error, &self.path))?;

        tracing::debug!(path = %self.path.display(), pages = documentation.len(), "Wrote documentation");
        Ok(())
    }
}
