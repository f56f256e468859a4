// Configuration: built-in defaults, an optional TOML file and environment
// overrides, in that order. Command-line flags are applied on top by `main`.
//
// ```toml
// base_url = "https://gutendex.com/books"
// log_level = "warn"
// ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Overrides `base_url`.
pub const ENV_BASE_URL: &str = "GUTENDEX_API_URL";
/// Overrides `log_level`; any `tracing_subscriber::EnvFilter` directive.
pub const ENV_LOG_LEVEL: &str = "GUTENDEX_LOG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Catalog endpoint, query parameters are appended to it.
    pub base_url: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit `path` must exist; otherwise the
    /// per-user file is read only when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_path().filter(|p| p.exists()),
        };
        let mut config = match file {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Apply environment overrides through `lookup`. Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
    }
}

/// `<config dir>/gutendex-cli/config.toml`, e.g. `~/.config/gutendex-cli/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gutendex-cli").join("config.toml"))
}
