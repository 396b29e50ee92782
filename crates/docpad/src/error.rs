//! CLI error types.

use docpad_config::ConfigError;
use docpad_storage::StorageError;
use docpad_viewer::ViewerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Viewer(#[from] ViewerError),

    #[error("{0}")]
    Server(String),
}
