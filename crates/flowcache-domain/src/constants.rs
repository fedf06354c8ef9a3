//! Domain constants

/// Default handed to the backend's integer read for [`crate::IntegerKey`].
///
/// A read that comes back with this value is reported as a cache miss, so
/// `i64::MIN` itself can never be cached through an integer key.
pub const INTEGER_ABSENT_SENTINEL: i64 = i64::MIN;

/// Provider name reported by backends that discard every write
pub const NULL_BACKEND_NAME: &str = "null";
