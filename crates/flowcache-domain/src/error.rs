//! Error handling types

use crate::value_objects::StorageKind;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for flowcache
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Backing store operation error
    #[error("Backend error: {message}")]
    Backend {
        /// Description of the backend error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A stored entry was read through the wrong storage kind
    #[error("Type mismatch for '{name}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Entry name
        name: String,
        /// Storage kind the caller asked for
        expected: StorageKind,
        /// Storage kind actually held by the backend
        found: StorageKind,
    },

    /// The process-wide cache store was initialized twice
    #[error("Cache store is already initialized")]
    AlreadyInitialized,

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Backend error creation methods
impl Error {
    /// Create a backend error
    pub fn backend<S: Into<String>>(message: S) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error with source
    pub fn backend_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>>(name: S, expected: StorageKind, found: StorageKind) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            found,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
