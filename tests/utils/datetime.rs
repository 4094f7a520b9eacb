use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use chrono_tz::Tz;
use macrokit::constants::MAX_EPOCH_MILLIS;
use macrokit::utils::datetime::*;

#[test]
fn test_epoch_zero() {
    assert_eq!(to_iso_string(0_i64).unwrap(), "1970-01-01T00:00:00.000Z");
}

#[test]
fn test_date_only_string_is_utc_midnight() {
    assert_eq!(to_iso_string("2024-01-05").unwrap(), "2024-01-05T00:00:00.000Z");
}

#[test]
fn test_full_iso_string_is_canonicalized() {
    assert_eq!(
        to_iso_string("2024-01-05T15:45:00Z").unwrap(),
        "2024-01-05T15:45:00.000Z"
    );
    assert_eq!(
        to_iso_string("2024-01-05T16:45:00.250+01:00").unwrap(),
        "2024-01-05T15:45:00.250Z"
    );
}

#[test]
fn test_instant_is_used_as_is() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 5, 15, 45, 0).unwrap();
    assert_eq!(to_iso_string(instant).unwrap(), "2024-01-05T15:45:00.000Z");

    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let zoned = offset.with_ymd_and_hms(2024, 1, 5, 17, 45, 0).unwrap();
    assert_eq!(to_iso_string(zoned).unwrap(), "2024-01-05T15:45:00.000Z");
}

#[test]
fn test_instant_is_truncated_to_millis() {
    let instant = DateTime::from_timestamp(1_704_469_500, 123_987_654).unwrap();
    assert_eq!(to_iso_string(instant).unwrap(), "2024-01-05T15:45:00.123Z");
}

#[test]
fn test_millis_round_trip() {
    for ms in [0_i64, 1, -1, 1_704_469_500_123, -62_198_755_200_000, 253_402_300_799_999] {
        let iso = to_iso_string(ms).unwrap();
        let parsed = parse_date_string(&iso, &Utc).unwrap();
        assert_eq!(parsed.timestamp_millis(), ms, "round trip of {ms} via {iso}");
    }
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs: Vec<DateLike> = vec![
        "2024-01-05".into(),
        "2024-01-05T15:45:00.000+05:30".into(),
        "Fri, 05 Jan 2024 15:45:00 GMT".into(),
        DateLike::Millis(1_700_000_000_000),
        "-000042-06-30T12:00:00Z".into(),
    ];

    for input in inputs {
        let once = to_iso_string(input.clone()).unwrap();
        let twice = to_iso_string(once.as_str()).unwrap();
        assert_eq!(once, twice, "normalizing {input} twice");
    }
}

#[test]
fn test_invalid_string_is_an_error() {
    let err = to_iso_string("not-a-date").unwrap_err();
    assert_eq!(err.input(), &DateLike::Text("not-a-date".to_string()));
    assert_eq!(err.to_string(), "Invalid date: \"not-a-date\"");

    assert!(to_iso_string("").is_err());
    assert!(to_iso_string("2024-02-30").is_err());
}

#[test]
fn test_out_of_range_millis_is_an_error() {
    assert!(to_iso_string(MAX_EPOCH_MILLIS + 1).is_err());
    assert!(to_iso_string(-MAX_EPOCH_MILLIS - 1).is_err());
    assert!(to_iso_string(i64::MAX).is_err());

    let err = to_iso_string(i64::MIN).unwrap_err();
    assert_eq!(err.input(), &DateLike::Millis(i64::MIN));
}

#[test]
fn test_fractional_millis_truncate_toward_zero() {
    assert_eq!(to_iso_string(1.7).unwrap(), "1970-01-01T00:00:00.001Z");
    assert_eq!(to_iso_string(-1.7).unwrap(), "1969-12-31T23:59:59.999Z");
    assert_eq!(to_iso_string(1_704_469_500_000.9).unwrap(), "2024-01-05T15:45:00.000Z");
    assert_eq!(DateLike::from(0.4), DateLike::Millis(0));
}

#[test]
fn test_non_finite_millis_are_errors() {
    assert!(to_iso_string(f64::NAN).is_err());
    assert!(to_iso_string(f64::INFINITY).is_err());
    assert!(to_iso_string(f64::NEG_INFINITY).is_err());
    assert!(to_iso_string(1e300).is_err());
}

#[test]
fn test_legacy_strings_are_normalized() {
    for input in [
        "Fri Jan 05 2024 15:45:00 GMT+0000",
        "2024/01/05 15:45",
        "January 5, 2024 15:45:00 UTC",
    ] {
        assert_eq!(to_iso_string(input).unwrap(), "2024-01-05T15:45:00.000Z", "{input}");
    }
    assert_eq!(to_iso_string("Jan 5, 2024").unwrap(), "2024-01-05T00:00:00.000Z");
}

#[test]
fn test_normalizer_reads_offsetless_times_in_its_zone() {
    let paris: Tz = "Europe/Paris".parse().unwrap();
    let normalizer = DateNormalizer::new(paris);
    assert_eq!(normalizer.timezone(), paris);

    // CET is UTC+1 in January
    assert_eq!(
        normalizer.to_iso_string("2024-01-05T16:45:00").unwrap(),
        "2024-01-05T15:45:00.000Z"
    );
    // Explicit offsets and date-only forms ignore the zone
    assert_eq!(
        normalizer.to_iso_string("2024-01-05T16:45:00Z").unwrap(),
        "2024-01-05T16:45:00.000Z"
    );
    assert_eq!(normalizer.to_iso_string("2024-01-05").unwrap(), "2024-01-05T00:00:00.000Z");
}

#[test]
fn test_default_normalizer_is_utc() {
    assert_eq!(DateNormalizer::default().timezone(), Tz::UTC);
    assert_eq!(
        to_iso_string("2024-01-05T15:45:00").unwrap(),
        "2024-01-05T15:45:00.000Z"
    );
}

#[test]
fn test_expanded_year_output() {
    assert_eq!(
        to_iso_string("+012345-01-01T00:00:00Z").unwrap(),
        "+012345-01-01T00:00:00.000Z"
    );
    assert_eq!(to_iso_string("0000-01-01").unwrap(), "0000-01-01T00:00:00.000Z");
}
