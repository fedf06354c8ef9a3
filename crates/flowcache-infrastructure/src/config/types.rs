//! Configuration types

use crate::constants::{DEFAULT_CONFIG_DIR, DEFAULT_LOG_LEVEL, DEFAULT_STORE_FILENAME};
use flowcache_domain::value_objects::{CacheOptions, CacheStrategyType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Backing store selection
    pub backend: BackendConfig,
    /// Decoration defaults
    pub strategy: StrategyConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Backing store implementations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    /// In-process memory (Moka), lost on exit
    Memory,
    /// JSON document on disk
    #[default]
    File,
    /// Stores nothing
    Null,
}

impl fmt::Display for BackendProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
            Self::Null => write!(f, "null"),
        }
    }
}

/// Backend configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend provider
    pub provider: BackendProvider,

    /// Store document for the file provider
    ///
    /// Defaults to `store.json` under the platform's local data directory.
    pub path: Option<PathBuf>,
}

impl BackendConfig {
    /// Backend of the given provider with no explicit path
    pub fn new(provider: BackendProvider) -> Self {
        Self {
            provider,
            path: None,
        }
    }

    /// File backend stored at `path`
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            provider: BackendProvider::File,
            path: Some(path.into()),
        }
    }

    /// Path the file provider will use, if one can be determined
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_STORE_FILENAME))
        })
    }
}

/// Defaults applied when decorating streams
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Strategy used when the caller does not pick one
    pub default: CacheStrategyType,

    /// Whether live values are written back by default
    pub persist_after_load: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            default: CacheStrategyType::IfHave,
            persist_after_load: true,
        }
    }
}

impl StrategyConfig {
    /// Decoration options described by this configuration
    pub fn options(&self) -> CacheOptions {
        CacheOptions::new(self.default).with_persist_after_load(self.persist_after_load)
    }
}

impl From<&StrategyConfig> for CacheOptions {
    fn from(config: &StrategyConfig) -> Self {
        config.options()
    }
}
