//! Error types for the viewer core.

use docpad_storage::StorageError;

use crate::validation::FieldErrors;

/// Failure to obtain a document from a URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Input did not pass URL validation; nothing was requested.
    #[error("invalid URL: {0:?}")]
    InvalidUrl(String),

    /// HTTP request failed (network error, timeout, non-2xx status).
    #[error("HTTP request failed")]
    Http(#[from] ureq::Error),

    /// Response body is not a documentation JSON object.
    #[error("response is not a documentation document")]
    Json(#[from] serde_json::Error),
}

/// Error from a controller operation.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// Fetching a new document failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Reading or writing the stored document failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Serializing the document for export failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// An edit did not pass validation.
    #[error("page is invalid")]
    Validation(FieldErrors),

    /// The operation needs a loaded document.
    #[error("no documentation loaded")]
    NotLoaded,
}
