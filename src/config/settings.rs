use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Example configuration file contents (bundled with the library)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// How long an archive or clear stays undoable
    pub undo_timeout: Duration,
    /// Override for the data directory (None = ~/.basket); hosts pass this
    /// to `util::init_data_dir` before anything touches the filesystem
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            undo_timeout: Duration::from_millis(5000),
            data_dir: None,
        }
    }
}

/// Raw TOML shape of the config file; every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct TomlConfig {
    undo_timeout_ms: Option<u64>,
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config path (~/.basket/config.toml)
    pub fn load() -> Self {
        Self::load_from(&crate::util::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file yields the defaults; an unparseable file logs a
    /// warning and yields the defaults; a partial file fills the gaps with
    /// defaults.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str::<TomlConfig>(&contents) {
            Ok(parsed) => Self::from_toml(parsed),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Invalid config file, using defaults"
                );
                Self::default()
            }
        }
    }

    fn from_toml(toml: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            undo_timeout: toml
                .undo_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.undo_timeout),
            data_dir: toml.data_dir,
        }
    }
}
