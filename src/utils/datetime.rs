//! Date parsing and ISO-8601 normalization
//!
//! This module turns the date shapes a macro receives (an existing instant, a
//! date string, or epoch milliseconds) into a single validated instant, and
//! renders instants in the canonical `YYYY-MM-DDTHH:mm:ss.sssZ` form.
//!
//! Date strings follow the ISO-8601 date-time string format used by web
//! platforms, with RFC 2822 and a few legacy layouts as fallbacks. Date-only strings are UTC;
//! date-times without an offset are read in the caller's time zone.

use crate::constants::{DEFAULT_TIMEZONE, MAX_EPOCH_MILLIS};
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::fmt;

/// Time zone used when none is configured
pub static DEFAULT_TZ: Lazy<Tz> = Lazy::new(|| DEFAULT_TIMEZONE.parse().unwrap_or(Tz::UTC));

/// A date in one of the shapes callers hand us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateLike {
    /// An existing date object
    Instant(DateTime<Utc>),
    /// A date string, parsed on use
    Text(String),
    /// Milliseconds since 1970-01-01T00:00:00Z
    Millis(i64),
}

impl<Z: TimeZone> From<DateTime<Z>> for DateLike {
    fn from(dt: DateTime<Z>) -> Self {
        DateLike::Instant(dt.with_timezone(&Utc))
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

impl From<String> for DateLike {
    fn from(s: String) -> Self {
        DateLike::Text(s)
    }
}

impl From<&String> for DateLike {
    fn from(s: &String) -> Self {
        DateLike::Text(s.clone())
    }
}

impl From<i64> for DateLike {
    fn from(ms: i64) -> Self {
        DateLike::Millis(ms)
    }
}

/// Fractional milliseconds are truncated toward zero. NaN and infinities
/// become unparseable text, so they resolve as invalid dates.
impl From<f64> for DateLike {
    fn from(ms: f64) -> Self {
        if ms.is_finite() {
            // Saturates past i64; those values are out of range anyway
            DateLike::Millis(ms.trunc() as i64)
        } else {
            DateLike::Text(ms.to_string())
        }
    }
}

impl fmt::Display for DateLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateLike::Instant(dt) => write!(f, "{}", format_iso(dt)),
            DateLike::Text(s) => write!(f, "{s:?}"),
            DateLike::Millis(ms) => write!(f, "{ms} ms since epoch"),
        }
    }
}

/// The input could not be resolved to a valid date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid date: {input}")]
pub struct InvalidDateError {
    input: DateLike,
}

impl InvalidDateError {
    pub fn new(input: DateLike) -> Self {
        Self { input }
    }

    /// The rejected input
    pub fn input(&self) -> &DateLike {
        &self.input
    }
}

/// Converts [`DateLike`] values to canonical ISO-8601 strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    tz: Tz,
}

impl DateNormalizer {
    /// Create a normalizer that reads offset-less date-times in `tz`
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Resolve any date shape to a millisecond-precision instant.
    ///
    /// Returns `None` for unparseable strings and out-of-range values.
    pub fn resolve(&self, input: &DateLike) -> Option<DateTime<Utc>> {
        match input {
            DateLike::Instant(dt) => from_epoch_millis(dt.timestamp_millis()),
            DateLike::Text(s) => parse_date_string(s, &self.tz),
            DateLike::Millis(ms) => from_epoch_millis(*ms),
        }
    }

    /// Render the input as `YYYY-MM-DDTHH:mm:ss.sssZ`.
    ///
    /// # Errors
    /// Returns [`InvalidDateError`] when the input does not resolve to a valid date.
    pub fn to_iso_string(&self, input: impl Into<DateLike>) -> Result<String, InvalidDateError> {
        let input = input.into();
        match self.resolve(&input) {
            Some(instant) => Ok(format_iso(&instant)),
            None => {
                log::debug!("Rejecting invalid date input: {}", input);
                Err(InvalidDateError::new(input))
            }
        }
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new(*DEFAULT_TZ)
    }
}

/// Normalize a date-like value to a canonical ISO-8601 string, reading
/// offset-less date-times in the default time zone.
///
/// # Errors
/// Returns [`InvalidDateError`] when the input does not resolve to a valid date.
pub fn to_iso_string(input: impl Into<DateLike>) -> Result<String, InvalidDateError> {
    DateNormalizer::default().to_iso_string(input)
}

/// Format an instant as `YYYY-MM-DDTHH:mm:ss.sssZ`.
///
/// Years outside `0..=9999` use the six-digit signed form (`+275760`, `-000001`).
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    let year = dt.year();
    let year = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else {
        format!("{year:+07}")
    };
    format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year,
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.timestamp_subsec_millis().min(999)
    )
}

/// Build an instant from epoch milliseconds, rejecting values outside
/// ±8.64e15 ms or outside chrono's representable range.
pub fn from_epoch_millis(ms: i64) -> Option<DateTime<Utc>> {
    if !(-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&ms) {
        return None;
    }
    DateTime::from_timestamp_millis(ms)
}

/// Parse a date string into an instant.
///
/// Accepts, in order:
/// - RFC 3339 (`2024-01-05T15:45:00.000Z`)
/// - the ISO-8601 date-time string format with its reduced and expanded
///   forms (`2024`, `2024-01`, `2024-01-05`, `2024-01-05T15:45`,
///   `+002024-01-05T15:45:00+01:00`, `2024-01-05T24:00`)
/// - RFC 2822 (`Fri, 05 Jan 2024 15:45:00 GMT`)
/// - legacy forms: `Date.prototype.toString()` output, slash dates
///   (`2024/01/05 15:45`) and month names (`Jan 5, 2024`, `January 5, 2024
///   15:45:00 UTC`)
///
/// Date-only ISO strings are UTC. Offset-less date-times, and legacy forms
/// without a zone, are read in `tz`.
pub fn parse_date_string<Z: TimeZone>(input: &str, tz: &Z) -> Option<DateTime<Utc>> {
    let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if trimmed.is_empty() {
        return None;
    }

    // chrono reports a `:60` second as a leap second; dates here have none
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return if dt.nanosecond() < 1_000_000_000 {
            from_epoch_millis(dt.timestamp_millis())
        } else {
            None
        };
    }

    if let Some(fields) = IsoFields::parse(trimmed) {
        return fields.resolve(tz);
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return from_epoch_millis(dt.timestamp_millis());
    }

    parse_legacy(trimmed, tz)
}

/// Date-time layouts tried after the standard formats, zone suffix removed
const LEGACY_DATETIME_FORMATS: &[&str] = &[
    "%a %b %d %Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

/// Date-only layouts; these resolve to midnight
const LEGACY_DATE_FORMATS: &[&str] = &["%a %b %d %Y", "%Y/%m/%d", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];

fn parse_legacy<Z: TimeZone>(s: &str, tz: &Z) -> Option<DateTime<Utc>> {
    let (local, offset) = split_zone_suffix(s);

    let naive = LEGACY_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(local, format).ok())
        .or_else(|| {
            LEGACY_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(local, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    let instant = match offset {
        Some(offset) => naive.checked_sub_signed(Duration::seconds(offset as i64))?.and_utc(),
        None => resolve_local(tz, naive)?,
    };
    from_epoch_millis(instant.timestamp_millis())
}

/// Split a trailing zone (`UTC`, `GMT`, `Z`, `GMT+0100`, `-05:00`) off a
/// legacy date string, dropping a parenthesized zone name first.
///
/// Returns the remaining text and the offset east of UTC in seconds.
fn split_zone_suffix(s: &str) -> (&str, Option<i32>) {
    let s = match s.find(" (") {
        Some(index) if s.ends_with(')') => s[..index].trim_end(),
        _ => s,
    };

    if let Some((head, zone)) = s.rsplit_once(' ') {
        let offset = match zone {
            "UTC" | "GMT" | "Z" => Some(0),
            _ => {
                let numeric = zone
                    .strip_prefix("GMT")
                    .or_else(|| zone.strip_prefix("UTC"))
                    .unwrap_or(zone);
                numeric_offset(numeric)
            }
        };
        if offset.is_some() {
            return (head.trim_end(), offset);
        }
    }

    (s, None)
}

/// A signed `±HH:mm` or `±HHmm` offset, in seconds
fn numeric_offset(s: &str) -> Option<i32> {
    if !s.starts_with(['+', '-']) {
        return None;
    }
    let mut cur = Cursor::new(s);
    let offset = cur.offset()??;
    cur.is_done().then_some(offset)
}

/// Wall-clock time of day with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WallTime {
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
}

impl WallTime {
    fn millis_of_day(self) -> i64 {
        ((self.hour as i64 * 60 + self.minute as i64) * 60 + self.second as i64) * 1000 + self.millis as i64
    }
}

/// Fields of an ISO-8601 date-time string, validated but not yet resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IsoFields {
    date: NaiveDate,
    time: Option<WallTime>,
    /// Offset east of UTC, in seconds
    offset: Option<i32>,
}

impl IsoFields {
    fn parse(s: &str) -> Option<Self> {
        let mut cur = Cursor::new(s);

        let year = cur.year()?;
        let mut month = 1;
        let mut day = 1;
        if cur.eat(b'-') {
            month = cur.number(2)?;
            if cur.eat(b'-') {
                day = cur.number(2)?;
            }
        }

        let mut time = None;
        let mut offset = None;
        if cur.eat(b'T') || cur.eat(b't') || cur.eat(b' ') {
            let hour = cur.number(2)?;
            if !cur.eat(b':') {
                return None;
            }
            let minute = cur.number(2)?;
            let mut second = 0;
            let mut millis = 0;
            if cur.eat(b':') {
                second = cur.number(2)?;
                if cur.eat(b'.') {
                    millis = cur.fraction_millis()?;
                }
            }
            let wall = WallTime {
                hour,
                minute,
                second,
                millis,
            };
            if !is_valid_time(wall) {
                return None;
            }
            time = Some(wall);
            offset = cur.offset()?;
        }

        if !cur.is_done() {
            return None;
        }

        // Rejects month 13, day 0 and February 30 rather than rolling over
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        Some(IsoFields { date, time, offset })
    }

    fn resolve<Z: TimeZone>(&self, tz: &Z) -> Option<DateTime<Utc>> {
        let time_ms = self.time.map(WallTime::millis_of_day).unwrap_or(0);
        let naive = self
            .date
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::milliseconds(time_ms))?;

        let instant = match (self.time, self.offset) {
            (Some(_), None) => resolve_local(tz, naive)?,
            (_, offset) => naive
                .checked_sub_signed(Duration::seconds(offset.unwrap_or(0) as i64))?
                .and_utc(),
        };
        from_epoch_millis(instant.timestamp_millis())
    }
}

/// `24:00` is only valid as the end of a day
fn is_valid_time(t: WallTime) -> bool {
    if t.hour == 24 {
        return t.minute == 0 && t.second == 0 && t.millis == 0;
    }
    t.hour < 24 && t.minute < 60 && t.second < 60
}

/// Map a local wall-clock time in `tz` to an instant.
///
/// In a fold the earlier instant wins; in a gap the offset in effect before
/// the transition applies, which moves the wall clock forward.
fn resolve_local<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            let day_before = naive.checked_sub_signed(Duration::days(1))?;
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = naive.checked_sub_signed(Duration::seconds(before.local_minus_utc() as i64))?;
            Some(Utc.from_utc_datetime(&utc))
        }
    }
}

/// Byte cursor over an ASCII date string
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn is_done(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Exactly `width` ASCII digits
    fn number(&mut self, width: usize) -> Option<u32> {
        let digits = self.bytes.get(self.pos..self.pos + width)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        self.pos += width;
        Some(digits.iter().fold(0, |acc, d| acc * 10 + (d - b'0') as u32))
    }

    /// `YYYY` or the expanded `±YYYYYY` form; `-000000` is not a year
    fn year(&mut self) -> Option<i32> {
        match self.peek() {
            Some(sign @ (b'+' | b'-')) => {
                self.pos += 1;
                let value = self.number(6)? as i32;
                if sign == b'-' {
                    (value != 0).then_some(-value)
                } else {
                    Some(value)
                }
            }
            _ => self.number(4).map(|year| year as i32),
        }
    }

    /// One or more fraction digits, truncated to milliseconds
    fn fraction_millis(&mut self) -> Option<u32> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        let digits = &self.bytes[start..self.pos];
        if digits.is_empty() {
            return None;
        }
        let millis = digits
            .iter()
            .chain(std::iter::repeat(&b'0'))
            .take(3)
            .fold(0, |acc, d| acc * 10 + (d - b'0') as u32);
        Some(millis)
    }

    /// `Z`, `±HH:mm`, `±HHmm`, or nothing. The outer `None` means malformed.
    fn offset(&mut self) -> Option<Option<i32>> {
        match self.peek() {
            Some(b'Z' | b'z') => {
                self.pos += 1;
                Some(Some(0))
            }
            Some(sign @ (b'+' | b'-')) => {
                self.pos += 1;
                let hours = self.number(2)?;
                self.eat(b':');
                let minutes = self.number(2)?;
                if hours > 23 || minutes > 59 {
                    return None;
                }
                let seconds = (hours * 3600 + minutes * 60) as i32;
                Some(Some(if sign == b'-' { -seconds } else { seconds }))
            }
            _ => Some(None),
        }
    }
}
