//! # flowcache - Backend Implementations
//!
//! Implementations of the [`KeyValueBackend`] port defined in
//! `flowcache-domain`.
//!
//! | Backend | Type | Description |
//! |---------|------|-------------|
//! | [`MokaBackend`] | Memory | In-process store, lost on exit |
//! | [`FileBackend`] | Persistent | JSON document on disk |
//! | [`NullBackend`] | Testing | Stores nothing |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! flowcache-providers = { version = "0.1", default-features = false, features = ["backend-file"] }
//! ```

// Re-export flowcache-domain types commonly used with backends
pub use flowcache_domain::error::{Error, Result};
pub use flowcache_domain::ports::KeyValueBackend;

/// Key-value backend implementations
pub mod backend;

#[cfg(feature = "backend-file")]
pub use backend::FileBackend;
#[cfg(feature = "backend-moka")]
pub use backend::MokaBackend;
pub use backend::NullBackend;
