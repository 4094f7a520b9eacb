//! Locale-specific display patterns
//!
//! Each supported locale renders a date with its medium date style joined to
//! its short time style, the way browsers render
//! `{ dateStyle: 'medium', timeStyle: 'short' }`.

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt;
use std::str::FromStr;

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const EN_GB_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Errors raised while resolving a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Unsupported locale '{0}' (supported: en-US, en-GB, de-DE, ja-JP)")]
    Unsupported(String),
}

/// Locales with a known display pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    DeDe,
    JaJp,
}

impl Locale {
    /// All supported locales, default first
    pub const ALL: [Locale; 4] = [Locale::EnUs, Locale::EnGb, Locale::DeDe, Locale::JaJp];

    /// Canonical BCP-47 tag
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::JaJp => "ja-JP",
        }
    }

    /// Render a zoned date/time with this locale's medium date and short time styles.
    #[must_use]
    pub fn render<Tz: TimeZone>(self, dt: &DateTime<Tz>) -> String {
        let month = dt.month0() as usize;
        let day = dt.day();
        let year = self.year_label(dt.year());
        let minute = dt.minute();

        match self {
            Locale::EnUs => {
                let (is_pm, hour12) = dt.hour12();
                let period = if is_pm { "PM" } else { "AM" };
                format!("{} {}, {}, {}:{:02} {}", EN_MONTHS[month], day, year, hour12, minute, period)
            }
            Locale::EnGb => {
                format!("{} {} {}, {:02}:{:02}", day, EN_GB_MONTHS[month], year, dt.hour(), minute)
            }
            Locale::DeDe => {
                format!("{:02}.{:02}.{}, {:02}:{:02}", day, month + 1, year, dt.hour(), minute)
            }
            Locale::JaJp => {
                format!("{}/{:02}/{:02} {}:{:02}", year, month + 1, day, dt.hour(), minute)
            }
        }
    }

    fn year_label(self, year: i32) -> String {
        match self {
            Locale::EnUs | Locale::EnGb if year < 1 => format!("{} BC", 1 - year),
            _ => year.to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de-de" | "de" => Ok(Locale::DeDe),
            "ja-jp" | "ja" => Ok(Locale::JaJp),
            _ => Err(LocaleError::Unsupported(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
