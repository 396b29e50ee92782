//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod fetch;
pub(crate) mod pages;
pub(crate) mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use docpad_config::{CliSettings, Config};
use docpad_storage::FsStorage;
use docpad_viewer::{Controller, HttpSource};

use crate::error::CliError;

pub(crate) use export::ExportArgs;
pub(crate) use fetch::FetchArgs;
pub(crate) use pages::PagesArgs;
pub(crate) use serve::ServeArgs;

/// Options shared by every command.
#[derive(Args, Debug)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover docpad.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the stored documentation (overrides config).
    #[arg(long, env = "DOCPAD_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl CommonArgs {
    /// Load configuration with these arguments applied on top.
    pub(crate) fn load_config(
        &self,
        host: Option<String>,
        port: Option<u16>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            host,
            port,
            storage_dir: self.storage_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Build a controller over the configured storage and hydrate it.
pub(crate) fn open_controller(config: &Config) -> Controller {
    let storage = Arc::new(FsStorage::new(config.storage_resolved.dir.clone()));
    let source = Arc::new(HttpSource::new(config.fetch.timeout()));
    let mut controller = Controller::new(storage, source);
    controller.hydrate();
    controller
}

/// Ensure the storage directory exists with a `.gitignore`.
pub(crate) fn ensure_storage_dir(dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir)?;

    let gitignore_path = dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by docpad\n*\n");
    }

    Ok(())
}
