//! HTTP server for the docpad documentation viewer.
//!
//! Serves the viewer as server-rendered HTML using axum. Browser interaction
//! is plain links and form posts:
//!
//! | Route                  | Method | Action                                  |
//! |------------------------|--------|-----------------------------------------|
//! | `/`                    | GET    | URL form, or redirect to the first page |
//! | `/`                    | POST   | `action=fetch&url=…`, `action=export`   |
//! | `/{title}`             | GET    | Page view (or editor)                   |
//! | `/{title}`             | POST   | `action=edit`, `action=save`            |
//! | `/assets/docpad.css`   | GET    | Stylesheet                              |
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::time::Duration;
//! use docpad_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7979,
//!         storage_dir: PathBuf::from(".docpad"),
//!         fetch_timeout: Duration::from_secs(30),
//!         version: "1.0.0".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (docpad-server)
//!                        │
//!                        ├─► handlers ──► Controller (docpad-viewer, behind a Mutex)
//!                        │                    │
//!                        │                    ├─► FsStorage (docpad-storage)
//!                        │                    └─► HttpSource (spawn_blocking)
//!                        │
//!                        └─► view (HTML from controller state)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;
mod view;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use docpad_storage::{FsStorage, Storage};
use docpad_viewer::{Controller, DEFAULT_TIMEOUT, DocumentSource, HttpSource};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the stored documentation.
    pub storage_dir: PathBuf,
    /// Timeout for document fetches.
    pub fetch_timeout: Duration,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            storage_dir: PathBuf::from(".docpad"),
            fetch_timeout: DEFAULT_TIMEOUT,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// Stored documentation is loaded once at startup.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.storage_dir.clone()));
    let source: Arc<dyn DocumentSource> = Arc::new(HttpSource::new(config.fetch_timeout));

    let mut controller = Controller::new(storage, source);
    controller.hydrate();

    let state = Arc::new(AppState::new(controller, config.version.clone()));
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, storage = %config.storage_dir.display(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docpad config.
#[must_use]
pub fn server_config_from_config(config: &docpad_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        storage_dir: config.storage_resolved.dir.clone(),
        fetch_timeout: config.fetch.timeout(),
        version,
    }
}
