//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `flowcache_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "flowcache.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "flowcache";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "FLOWCACHE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// BACKEND CONSTANTS
// ============================================================================

/// File name of the persistent store inside the data directory
pub const DEFAULT_STORE_FILENAME: &str = "store.json";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "FLOWCACHE_LOG";

/// File stem used for rolling log files
pub const LOG_FILE_STEM: &str = "flowcache";
