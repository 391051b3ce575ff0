//! Configuration loading from `~/.tcal/config.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding tcal's files.
pub const DATA_DIR: &str = ".tcal";
pub const DB_FILE: &str = "events.db";
pub const CONFIG_FILE: &str = "config.toml";
/// Environment variable overriding the database path.
pub const DB_ENV: &str = "TCAL_DB";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Event storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Event storage configuration.
#[derive(Debug, Deserialize, Default)]
pub struct StorageConfig {
    /// Database file. A leading `~/` is expanded to the home directory.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Pick the database path.
    ///
    /// Precedence: `--db` flag, then `TCAL_DB`, then `storage.path`, then
    /// `~/.tcal/events.db`.
    pub fn db_path(
        &self,
        flag: Option<PathBuf>,
        env: Option<PathBuf>,
        home: Option<&Path>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(path) = flag.or(env) {
            return Ok(path);
        }
        if let Some(path) = &self.storage.path {
            return expand_home(path, home);
        }
        let home = home.ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(DATA_DIR).join(DB_FILE))
    }
}

/// Default location of the config file.
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(DATA_DIR).join(CONFIG_FILE)
}

/// The user's home directory, from `HOME` (or `USERPROFILE` on Windows).
pub fn home_dir() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var_os("USERPROFILE").map(PathBuf::from)
    }
    #[cfg(not(windows))]
    {
        std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
    }
}

fn expand_home(path: &Path, home: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home.ok_or(ConfigError::HomeNotFound)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("home directory not found: set HOME, TCAL_DB or pass --db")]
    HomeNotFound,
}
