//! Fixtures shared by the projection tests.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;
use shared::SiteData;

use crate::{
    format::{DateFormatter, DateStyle},
    view::memory::MemoryView,
};

/// Formats as `"{locale}|{style}|{YYYY-MM-DD}"` so tests can see what the
/// projectors asked for.
pub(crate) struct StubFormatter;

impl DateFormatter for StubFormatter {
    fn format(&self, at: NaiveDateTime, locale_tag: &str, style: DateStyle) -> String {
        format!("{locale_tag}|{style:?}|{}", at.format("%Y-%m-%d"))
    }
}

pub(crate) fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}

pub(crate) fn site_data() -> SiteData {
    serde_json::from_value(json!({
        "translations": {
            "es": {
                "hero": {
                    "title": "Música sacra",
                    "emptySpotlight": "Pronto anunciaremos conciertos",
                    "ctaSpotlight": "Ver agenda",
                    "ctaPrimary": "Contactar"
                },
                "about": { "milestones": ["1998 · Fundación", "2010 · Gira europea"] },
                "programs": { "tabs": { "sacred": "Sacro", "secular": "Profano" } },
                "contact": { "form": {
                    "nameLabel": "Nombre",
                    "emailLabel": "Correo",
                    "messageLabel": "Mensaje"
                } }
            },
            "en": {
                "hero": {
                    "title": "Sacred music",
                    "emptySpotlight": "Concerts coming soon",
                    "ctaSpotlight": "",
                    "ctaPrimary": "Get in touch"
                },
                "about": { "milestones": ["1998 · Founded"] },
                "programs": { "tabs": { "sacred": "Sacred", "secular": "Secular" } },
                "contact": { "form": {
                    "nameLabel": "Name",
                    "emailLabel": "Email",
                    "messageLabel": "Message"
                } }
            }
        },
        "agenda": [
            { "date": "2025-01-10", "time": "20:00", "city": "Granada", "venue": "Capilla Real", "program": "Motetes de Victoria" },
            { "date": "2025-03-01", "city": "Sevilla", "venue": "Catedral", "program": "Vísperas", "notes": "Entrada libre" },
            { "date": "2025-02-15", "time": "19:30", "city": "Toledo", "venue": "San Juan", "program": "Lamentaciones" }
        ],
        "programs": {
            "sacred": [
                { "title": "Victoria", "items": ["O magnum mysterium", "Ave Maria"] },
                { "title": "Guerrero", "items": ["Duo Seraphim"] }
            ],
            "secular": [
                { "title": "Cancionero de Palacio", "items": ["Riu riu chiu"] }
            ]
        }
    }))
    .expect("fixture site data")
}

/// A page with one node per translated text, both language buttons, three
/// tabs (one without programs), a spotlight and three slides.
pub(crate) fn page_view() -> MemoryView {
    MemoryView::new()
        .with_text_node("hero.title", "")
        .with_text_node("hero.title", "")
        .with_text_node("about.heading", "Sobre nosotros")
        .with_text_node("hero", "static")
        .with_spotlight()
        .with_language_buttons(&["es", "en"])
        .with_tabs(&["sacred", "secular", "baroque"])
        .with_slides(3)
}
