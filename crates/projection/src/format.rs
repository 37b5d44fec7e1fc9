//! Locale-aware date rendering for agenda cards and the spotlight.

use chrono::{Locale, NaiveDateTime, TimeZone, Utc};
use shared::LanguageCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Short weekday, day, long month, year.
    Card,
    /// Long weekday, day, long month.
    Spotlight,
}

pub trait DateFormatter {
    fn format(&self, at: NaiveDateTime, locale_tag: &str, style: DateStyle) -> String;
}

/// Locale tag used for a language code. Spanish gets `es-ES`, everything
/// else is formatted as British English.
pub fn locale_tag(lang: &LanguageCode) -> &'static str {
    match lang.as_str() {
        "es" => "es-ES",
        _ => "en-GB",
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoDateFormatter;

impl ChronoDateFormatter {
    fn pattern(locale_tag: &str, style: DateStyle) -> (Locale, &'static str) {
        match (locale_tag, style) {
            ("es-ES", DateStyle::Card) => (Locale::es_ES, "%a, %-d de %B de %Y"),
            ("es-ES", DateStyle::Spotlight) => (Locale::es_ES, "%A, %-d de %B"),
            ("en-GB", DateStyle::Card) => (Locale::en_GB, "%a %-d %B %Y"),
            ("en-GB", DateStyle::Spotlight) => (Locale::en_GB, "%A %-d %B"),
            (_, DateStyle::Card) => (Locale::POSIX, "%a %-d %B %Y"),
            (_, DateStyle::Spotlight) => (Locale::POSIX, "%A %-d %B"),
        }
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format(&self, at: NaiveDateTime, locale_tag: &str, style: DateStyle) -> String {
        let (locale, pattern) = Self::pattern(locale_tag, style);
        Utc.from_utc_datetime(&at)
            .format_localized(pattern, locale)
            .to_string()
    }
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
