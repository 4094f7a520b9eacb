use chrono_tz::Tz;
use macrokit::config::Config;
use macrokit::ui::components::last_edited::*;
use macrokit::ui::renderer::AnsiRenderer;
use macrokit::utils::display::DateFormatter;
use macrokit::utils::locale::Locale;

#[test]
fn test_last_edited_row() {
    let view = LastEditedView::new(DateFormatter::default()).edited_at("2024-01-05T15:45:00.000Z");

    let row = view.row();
    assert_eq!(row.label, "Last edited");
    assert_eq!(row.text(), "Last edited: Jan 5, 2024, 3:45 PM");
    assert_eq!(
        view.render(&AnsiRenderer::plain_text()),
        "Last edited: Jan 5, 2024, 3:45 PM"
    );
}

#[test]
fn test_last_edited_defaults_to_now() {
    let view = LastEditedView::new(DateFormatter::default());
    assert!(view.timestamp().ends_with('Z'));
    assert_ne!(view.row().value, view.timestamp());
}

#[test]
fn test_last_edited_invalid_timestamp_passes_through() {
    let view = LastEditedView::new(DateFormatter::default()).edited_at("unknown");
    assert_eq!(view.row().text(), "Last edited: unknown");
}

#[test]
fn test_last_edited_from_config() {
    let mut config = Config::default();
    config.display.locale = "de-DE".to_string();
    config.display.timezone = "Europe/Berlin".to_string();
    config.macro_row.label = "Zuletzt bearbeitet".to_string();

    let view = LastEditedView::from_config(&config)
        .unwrap()
        .edited_at("2024-01-05T15:45:00.000Z");
    assert_eq!(view.label(), "Zuletzt bearbeitet");
    assert_eq!(view.row().text(), "Zuletzt bearbeitet: 05.01.2024, 16:45");
}

#[test]
fn test_last_edited_custom_formatter() {
    let tokyo: Tz = "Asia/Tokyo".parse().unwrap();
    let view = LastEditedView::new(DateFormatter::new(Locale::JaJp, tokyo))
        .with_label("更新")
        .edited_at("2024-01-05T15:45:00.000Z");
    assert_eq!(view.row().text(), "更新: 2024/01/06 0:45");
}

#[test]
fn test_last_edited_from_invalid_config() {
    let mut config = Config::default();
    config.display.timezone = "Mars/Olympus_Mons".to_string();
    assert!(LastEditedView::from_config(&config).is_err());
}
