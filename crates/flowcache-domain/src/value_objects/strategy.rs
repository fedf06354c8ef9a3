//! Strategy selection

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caching behaviour applied to a live stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheStrategyType {
    /// Emit the cached value (if any) first, then every live value
    #[default]
    IfHave,
    /// Emit only the cached value (if any); live values just refresh the cache
    Only,
}

impl fmt::Display for CacheStrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IfHave => write!(f, "if_have"),
            Self::Only => write!(f, "only"),
        }
    }
}

impl FromStr for CacheStrategyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "if_have" | "ifhave" => Ok(Self::IfHave),
            "only" => Ok(Self::Only),
            other => Err(Error::configuration(format!(
                "Unknown cache strategy: {other}. Use if_have or only"
            ))),
        }
    }
}

/// Cache Options
///
/// Parameters of one stream decoration: which strategy to apply and whether
/// live values are written back to the cache.
///
/// # Example
///
/// ```
/// use flowcache_domain::{CacheOptions, CacheStrategyType};
///
/// let options = CacheOptions::default().with_persist_after_load(false);
/// assert_eq!(options.strategy, CacheStrategyType::IfHave);
/// assert!(!options.persist_after_load);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Strategy to apply
    pub strategy: CacheStrategyType,
    /// Write every live value back to the cache
    pub persist_after_load: bool,
}

impl CacheOptions {
    /// Options for the given strategy, persisting live values
    pub fn new(strategy: CacheStrategyType) -> Self {
        Self {
            strategy,
            persist_after_load: true,
        }
    }

    /// Get-If-Available with persistence
    pub fn if_have() -> Self {
        Self::new(CacheStrategyType::IfHave)
    }

    /// Get-Only with persistence
    pub fn only() -> Self {
        Self::new(CacheStrategyType::Only)
    }

    /// Set the strategy
    pub fn with_strategy(mut self, strategy: CacheStrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set whether live values are persisted
    pub fn with_persist_after_load(mut self, persist_after_load: bool) -> Self {
        self.persist_after_load = persist_after_load;
        self
    }
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self::if_have()
    }
}
