//! Human-readable date display
//!
//! Renders date strings in a locale's medium date and short time styles,
//! e.g. `"Jan 5, 2024, 3:45 PM"` for `en-US`. Strings that do not parse are
//! shown as they came in.

use crate::utils::datetime::{parse_date_string, DEFAULT_TZ};
use crate::utils::locale::Locale;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Locale and time zone aware date formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    locale: Locale,
    tz: Tz,
}

impl DateFormatter {
    pub fn new(locale: Locale, tz: Tz) -> Self {
        Self { locale, tz }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Format an ISO-8601 date string for display
    ///
    /// # Arguments
    /// * `iso` - Date string, normally ISO-8601
    ///
    /// # Returns
    /// * `String` - Locale rendering of the date, or `iso` unchanged if it does not parse
    pub fn format_display_date(&self, iso: &str) -> String {
        match parse_date_string(iso, &self.tz) {
            Some(instant) => self.format_instant(&instant),
            None => {
                log::debug!("Could not parse {:?} as a date, displaying it as-is", iso);
                iso.to_string()
            }
        }
    }

    /// Format an already-resolved instant for display
    pub fn format_instant(&self, instant: &DateTime<Utc>) -> String {
        self.locale.render(&instant.with_timezone(&self.tz))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), *DEFAULT_TZ)
    }
}

/// Format an ISO-8601 date string in the default locale (`en-US`) and time zone (`UTC`).
///
/// Unparseable input is returned unchanged.
pub fn format_display_date(iso: &str) -> String {
    DateFormatter::default().format_display_date(iso)
}
