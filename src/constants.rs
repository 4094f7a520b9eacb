//! Constants used throughout the application
//!
//! This module centralizes default values, limits, and UI text so the
//! library, the configuration layer, and the CLI agree on them.

// Display defaults
/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";
/// IANA time zone used when none is configured
pub const DEFAULT_TIMEZONE: &str = "UTC";

// Macro defaults
/// Label of the last-edited macro row
pub const DEFAULT_MACRO_LABEL: &str = "Last edited";

// Date range limits
/// Largest absolute epoch-millisecond value a date may hold (±100,000,000 days)
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

// Config and log locations
pub const CONFIG_FILE_NAME: &str = "macrokit.toml";
pub const APP_DIR_NAME: &str = "macrokit";
pub const XDG_CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "macrokit.log";
/// Timestamp format for log records
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_INVALID_DATE: &str = "❌ Invalid date";
