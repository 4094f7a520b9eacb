//! macrokit - date display helpers for the last-edited page macro
//!
//! This library renders the text of a "last edited" macro: it normalizes
//! date-like values to canonical ISO-8601 strings, formats ISO strings for
//! display in a configured locale and time zone, and lays out `label: value`
//! rows through a pluggable rendering backend.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup for the binary
//! * [`ui`] - Presentational components and rendering backends
//! * [`utils`] - Date parsing, normalization and display formatting
//!
//! # Example
//!
//! ```
//! use macrokit::{format_display_date, to_iso_string};
//!
//! assert_eq!(format_display_date("2024-01-05T15:45:00.000Z"), "Jan 5, 2024, 3:45 PM");
//! assert_eq!(format_display_date("garbage"), "garbage");
//! assert_eq!(to_iso_string(0_i64).unwrap(), "1970-01-01T00:00:00.000Z");
//! ```

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities
pub mod logger;

/// Presentational components and their rendering backends
pub mod ui;

/// Date/time utility functions
pub mod utils;

// Re-export the date helpers for convenient access
pub use utils::datetime::{to_iso_string, DateLike, DateNormalizer, InvalidDateError};
pub use utils::display::{format_display_date, DateFormatter};
pub use utils::locale::{Locale, LocaleError};
