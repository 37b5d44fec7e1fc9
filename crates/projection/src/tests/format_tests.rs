use super::*;
use chrono::NaiveDate;

fn friday_evening() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 10)
        .expect("date")
        .and_hms_opt(20, 0, 0)
        .expect("time")
}

#[test]
fn spanish_maps_to_es_es_and_everything_else_to_en_gb() {
    assert_eq!(locale_tag(&LanguageCode::from("es")), "es-ES");
    assert_eq!(locale_tag(&LanguageCode::from("en")), "en-GB");
    assert_eq!(locale_tag(&LanguageCode::from("fr")), "en-GB");
}

#[test]
fn british_card_date_has_short_weekday_and_year() {
    let text = ChronoDateFormatter.format(friday_evening(), "en-GB", DateStyle::Card);
    assert_eq!(text, "Fri 10 January 2025");
}

#[test]
fn british_spotlight_date_has_long_weekday_and_no_year() {
    let text = ChronoDateFormatter.format(friday_evening(), "en-GB", DateStyle::Spotlight);
    assert_eq!(text, "Friday 10 January");
}

#[test]
fn spanish_dates_use_spanish_month_names() {
    let card = ChronoDateFormatter.format(friday_evening(), "es-ES", DateStyle::Card);
    assert!(card.contains("enero"), "card: {card}");
    assert!(card.ends_with("2025"), "card: {card}");

    let spotlight = ChronoDateFormatter.format(friday_evening(), "es-ES", DateStyle::Spotlight);
    assert!(spotlight.contains("10 de enero"), "spotlight: {spotlight}");
}
