//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader
//!
//! Loads settings as TOML from the per-user config directory found with
//! the [`directories`](https://docs.rs/directories) crate. Nothing is ever
//! written: a missing file simply means the defaults.
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs as TokioFs;

/// Main configuration struct for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hidden-file visibility at startup.
    pub show_hidden: bool,

    /// Characters of an entry name shown before truncation.
    pub name_column_width: usize,

    /// Width of the right-aligned size column.
    pub size_column_width: usize,

    /// Render sizes as `1.2 MiB` instead of raw byte counts.
    pub human_readable_sizes: bool,

    /// Default filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_hidden: false,
            name_column_width: 30,
            size_column_width: 30,
            human_readable_sizes: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads config from the app config dir, or returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/dirnav/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?).await
    }

    /// Reads `path` if it exists. A missing file yields the defaults and
    /// is not created.
    pub async fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !TokioFs::try_exists(path).await? {
            return Ok(Self::default());
        }

        let text = TokioFs::read_to_string(path).await?;
        Ok(Self::from_toml_str(&text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    fn project_dirs() -> anyhow::Result<ProjectDirs> {
        ProjectDirs::from("org", "dirnav", "dirnav")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory."))
    }

    /// Returns the canonical config file path.
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Directory for the rolling log files.
    pub fn log_dir() -> anyhow::Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().join("logs"))
    }
}
