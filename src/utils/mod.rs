//! Utility modules for macrokit.
//!
//! This module contains the date helpers behind the macro's display text:
//!
//! - [`datetime`] - Date parsing and canonical ISO-8601 normalization
//! - [`display`] - Locale and time zone aware display formatting
//! - [`locale`] - Per-locale display patterns
//!
//! Everything here is a pure function of its input and configuration, so
//! it can be called from any thread without coordination.

pub mod datetime;
pub mod display;
pub mod locale;
