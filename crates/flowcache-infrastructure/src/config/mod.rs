//! Configuration management
//!
//! Types describing how flowcache is set up, and the loader that merges
//! them from defaults, a TOML file and `FLOWCACHE__` environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, BackendConfig, BackendProvider, LoggingConfig, StrategyConfig};
