//! Encoded representation of a cached value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage representation a key writes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    /// Backend string storage (also used by structured values)
    Text,
    /// Backend native integer storage
    Integer,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// Stored Value
///
/// What a key's `encode` hands to the backend and what its `decode`
/// receives back. Structured values are serialized to [`StoredValue::Text`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    /// String form
    Text(String),
    /// Integer form
    Integer(i64),
}

impl StoredValue {
    /// Storage kind of this value
    pub fn kind(&self) -> StorageKind {
        match self {
            Self::Text(_) => StorageKind::Text,
            Self::Integer(_) => StorageKind::Integer,
        }
    }

    /// Borrow the text form, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Integer(_) => None,
        }
    }

    /// The integer form, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}
