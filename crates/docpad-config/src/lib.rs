//! Configuration management for docpad.
//!
//! Parses `docpad.toml` with serde and discovers it in the current directory
//! or any parent. Without a config file the defaults apply, relative to the
//! current directory.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7979
//!
//! [storage]
//! dir = ".docpad"
//!
//! [fetch]
//! timeout_secs = 30
//! ```
//!
//! CLI settings are applied after loading via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `server.host` and `storage.dir` support `${VAR}` (error if unset) and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docpad.toml";

/// Default storage directory, relative to the config file.
const DEFAULT_STORAGE_DIR: &str = ".docpad";

/// Upper bound for `fetch.timeout_secs`.
const MAX_TIMEOUT_SECS: u64 = 600;

/// CLI settings that override configuration file values.
///
/// Only `Some` fields override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override storage directory.
    pub storage_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Storage section as written in TOML.
    storage: StorageConfigRaw,
    /// Fetch configuration.
    pub fetch: FetchConfig,

    /// Resolved storage configuration (set after loading).
    #[serde(skip)]
    pub storage_resolved: StorageConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct StorageConfigRaw {
    dir: Option<String>,
}

/// Resolved storage configuration.
#[derive(Debug, Default)]
pub struct StorageConfig {
    /// Directory holding `documentation.json`.
    pub dir: PathBuf,
}

/// Document fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Overall HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl FetchConfig {
    /// Timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`DOCPAD_HOST`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `docpad.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, or if
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config(&std::env::current_dir()?) {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_base(&std::env::current_dir()?)
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(dir) = &settings.storage_dir {
            self.storage_resolved.dir.clone_from(dir);
        }
    }

    /// Search for the config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Default config with the storage directory under `base`.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfigRaw::default(),
            fetch: FetchConfig::default(),
            storage_resolved: StorageConfig {
                dir: base.join(DEFAULT_STORAGE_DIR),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_fetch()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_fetch(&self) -> Result<(), ConfigError> {
        let timeout = self.fetch.timeout_secs;
        if timeout == 0 || timeout > MAX_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "fetch.timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        if let Some(dir) = &self.storage.dir {
            self.storage.dir = Some(expand::expand_env(dir, "storage.dir")?);
        }
        Ok(())
    }

    /// Resolve the storage directory against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let dir = self.storage.dir.as_deref().unwrap_or(DEFAULT_STORAGE_DIR);
        self.storage_resolved = StorageConfig {
            dir: config_dir.join(dir),
        };
    }
}
