//! Infrastructure Layer - flowcache
//!
//! Cross-cutting concerns around the cache core:
//!
//! - [`config`]: layered configuration (defaults, TOML file, environment)
//! - [`logging`]: `tracing` subscriber setup
//! - [`bootstrap`]: backend construction and global store initialization
//! - [`error_ext`]: context helpers converting foreign errors

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{create_backend, init_global};
pub use config::{AppConfig, BackendConfig, BackendProvider, ConfigLoader, LoggingConfig, StrategyConfig};
