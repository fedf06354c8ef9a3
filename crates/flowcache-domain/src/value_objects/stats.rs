//! Cache operation statistics

use serde::{Deserialize, Serialize};

/// Cache Operation Statistics
///
/// Snapshot of the counters a cache store keeps while serving reads and
/// writes.
///
/// # Example
///
/// ```
/// use flowcache_domain::CacheStats;
///
/// let stats = CacheStats { hits: 3, misses: 1, writes: 2 };
/// assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Reads that produced a value
    pub hits: u64,
    /// Reads that produced nothing (absent, undecodable or failed)
    pub misses: u64,
    /// Successful writes
    pub writes: u64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of reads
    pub fn reads(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hit rate (0.0 to 1.0), 0.0 when nothing was read yet
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.reads();
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}
