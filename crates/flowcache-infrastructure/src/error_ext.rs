//! Error extension utilities
//!
//! Context extension methods converting foreign errors into the domain
//! error type.

use flowcache_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use flowcache_infrastructure::error_ext::ErrorContext;
///
/// let content = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read config file: {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to a Result, converting the error to our domain Error type
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context with lazy evaluation for expensive context creation
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;

    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::Infrastructure {
            message: format!("{}: {err}", f()),
            source: Some(Box::new(err)),
        })
    }

    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
