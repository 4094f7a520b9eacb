use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use macrokit::utils::display::*;
use macrokit::utils::locale::Locale;

#[test]
fn test_format_display_date_en_us() {
    assert_eq!(format_display_date("2024-01-05T15:45:00.000Z"), "Jan 5, 2024, 3:45 PM");
}

#[test]
fn test_format_display_date_midnight_and_noon() {
    assert_eq!(format_display_date("2024-07-04T00:05:00Z"), "Jul 4, 2024, 12:05 AM");
    assert_eq!(format_display_date("2024-07-04T12:00:00Z"), "Jul 4, 2024, 12:00 PM");
}

#[test]
fn test_format_display_date_date_only() {
    assert_eq!(format_display_date("2024-01-05"), "Jan 5, 2024, 12:00 AM");
}

#[test]
fn test_invalid_input_passes_through() {
    for input in ["garbage", "not-a-date", "", "  ", "2024-13-45", "yesterday"] {
        assert_eq!(format_display_date(input), input);
    }
}

#[test]
fn test_valid_input_is_rendered_differently() {
    for input in ["2024-01-05", "2024-01-05T15:45:00.000Z", "1999-12-31T23:59:59+05:00"] {
        let formatted = format_display_date(input);
        assert!(!formatted.is_empty());
        assert_ne!(formatted, input);
    }
}

#[test]
fn test_formatter_uses_its_timezone() {
    let new_york: Tz = "America/New_York".parse().unwrap();
    let formatter = DateFormatter::new(Locale::EnUs, new_york);

    // 15:45 UTC is 10:45 EST
    assert_eq!(
        formatter.format_display_date("2024-01-05T15:45:00.000Z"),
        "Jan 5, 2024, 10:45 AM"
    );
    // Offset-less date-times are read in the formatter's zone
    assert_eq!(formatter.format_display_date("2024-01-05T15:45"), "Jan 5, 2024, 3:45 PM");
}

#[test]
fn test_formatter_crosses_date_line() {
    let tokyo: Tz = "Asia/Tokyo".parse().unwrap();
    let formatter = DateFormatter::new(Locale::JaJp, tokyo);
    assert_eq!(formatter.format_display_date("2024-12-31T20:00:00Z"), "2025/01/01 5:00");
}

#[test]
fn test_formatter_locales() {
    let iso = "2024-01-05T15:45:00.000Z";
    let expected = [
        (Locale::EnUs, "Jan 5, 2024, 3:45 PM"),
        (Locale::EnGb, "5 Jan 2024, 15:45"),
        (Locale::DeDe, "05.01.2024, 15:45"),
        (Locale::JaJp, "2024/01/05 15:45"),
    ];

    for (locale, rendered) in expected {
        let formatter = DateFormatter::new(locale, Tz::UTC);
        assert_eq!(formatter.format_display_date(iso), rendered, "locale {locale}");
    }
}

#[test]
fn test_format_instant() {
    let formatter = DateFormatter::default();
    assert_eq!(formatter.locale(), Locale::EnUs);
    assert_eq!(formatter.timezone(), Tz::UTC);

    let instant = Utc.with_ymd_and_hms(2023, 9, 1, 8, 7, 0).unwrap();
    assert_eq!(formatter.format_instant(&instant), "Sep 1, 2023, 8:07 AM");
}
