use super::*;
use crate::{
    test_support::{at, site_data, StubFormatter},
    view::memory::MemoryView,
};
use shared::LanguageCode;

fn state_with_fixture() -> AppState {
    let mut state = AppState::default();
    state.apply(site_data());
    state
}

fn entry(date: &str, time: Option<&str>, program: &str) -> AgendaEntry {
    serde_json::from_value(serde_json::json!({
        "date": date,
        "time": time,
        "city": "Madrid",
        "venue": "Real",
        "program": program
    }))
    .expect("agenda entry")
}

fn spotlight_program(agenda: &[AgendaEntry], now: NaiveDateTime) -> &str {
    &select_spotlight(agenda, now).expect("spotlight").program
}

#[test]
fn picks_earliest_entry_not_yet_started() {
    let agenda = vec![
        entry("2025-01-10", None, "january"),
        entry("2025-03-01", None, "march"),
        entry("2025-02-15", None, "february"),
    ];

    let chosen = select_spotlight(&agenda, at(2025, 2, 1)).expect("spotlight");
    assert_eq!(chosen.program, "february");
}

#[test]
fn falls_back_to_earliest_entry_when_all_are_past() {
    let agenda = vec![
        entry("2025-01-10", None, "january"),
        entry("2025-03-01", None, "march"),
        entry("2025-02-15", None, "february"),
    ];

    let chosen = select_spotlight(&agenda, at(2025, 4, 1)).expect("spotlight");
    assert_eq!(chosen.program, "january");
}

#[test]
fn entry_starting_exactly_now_counts_as_upcoming() {
    let agenda = vec![
        entry("2025-02-01", Some("10:00"), "morning"),
        entry("2025-02-01", Some("18:00"), "evening"),
    ];
    let now = at(2025, 2, 1).date().and_hms_opt(10, 0, 0).expect("time");

    assert_eq!(spotlight_program(&agenda, now), "morning");
}

#[test]
fn time_of_day_orders_entries_on_the_same_date() {
    let agenda = vec![
        entry("2025-05-05", Some("21:00"), "late"),
        entry("2025-05-05", None, "midnight"),
        entry("2025-05-05", Some("12:00"), "noon"),
    ];

    assert_eq!(spotlight_program(&agenda, at(2025, 1, 1)), "midnight");
}

#[test]
fn identical_start_keeps_source_order() {
    let agenda = vec![
        entry("2025-06-01", Some("20:00"), "first"),
        entry("2025-06-01", Some("20:00"), "second"),
    ];

    assert_eq!(spotlight_program(&agenda, at(2025, 1, 1)), "first");
    assert_eq!(spotlight_program(&agenda, at(2026, 1, 1)), "first");
}

#[test]
fn empty_agenda_has_no_spotlight() {
    assert!(select_spotlight(&[], at(2025, 1, 1)).is_none());
}

#[test]
fn renders_upcoming_entry_into_spotlight_slots() {
    let state = state_with_fixture();
    let mut view = MemoryView::new().with_spotlight();

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 1));

    assert_eq!(view.slot(Slot::SpotlightTitle), "Lamentaciones");
    assert_eq!(
        view.slot(Slot::SpotlightMeta),
        "es-ES|Spotlight|2025-02-15 · 19:30 · Toledo · San Juan"
    );
    assert_eq!(view.slot(Slot::SpotlightNotes), "");
    assert_eq!(view.slot(Slot::SpotlightCta), "Ver agenda");
}

#[test]
fn missing_time_is_shown_as_midnight() {
    let state = state_with_fixture();
    let mut view = MemoryView::new().with_spotlight();

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 20));

    assert_eq!(view.slot(Slot::SpotlightTitle), "Vísperas");
    assert_eq!(
        view.slot(Slot::SpotlightMeta),
        "es-ES|Spotlight|2025-03-01 · 00:00 · Sevilla · Catedral"
    );
    assert_eq!(view.slot(Slot::SpotlightNotes), "Entrada libre");
}

#[test]
fn empty_agenda_renders_placeholder_without_meta_or_notes() {
    let mut state = state_with_fixture();
    state.agenda.clear();
    let mut view = MemoryView::new().with_spotlight();
    view.set_slot_text(Slot::SpotlightMeta, "stale meta");
    view.set_slot_text(Slot::SpotlightNotes, "stale notes");

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 1));

    assert_eq!(
        view.slot(Slot::SpotlightTitle),
        "Pronto anunciaremos conciertos"
    );
    assert_eq!(view.slot(Slot::SpotlightMeta), "");
    assert_eq!(view.slot(Slot::SpotlightNotes), "");
    assert_eq!(view.slot(Slot::SpotlightCta), "Ver agenda");
}

#[test]
fn empty_spotlight_cta_falls_back_to_primary_cta() {
    let mut state = state_with_fixture();
    state.lang = LanguageCode::from("en");
    let mut view = MemoryView::new().with_spotlight();

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 1));

    assert_eq!(view.slot(Slot::SpotlightCta), "Get in touch");
    let meta = view.slot(Slot::SpotlightMeta);
    assert!(meta.starts_with("en-GB|Spotlight|"), "{meta}");
}

#[test]
fn page_without_spotlight_region_is_left_alone() {
    let state = state_with_fixture();
    let mut view = MemoryView::new();

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 1));

    assert!(view.slots.is_empty());
}

#[test]
fn unsupported_language_leaves_spotlight_untouched() {
    let mut state = state_with_fixture();
    state.lang = LanguageCode::from("fr");
    let mut view = MemoryView::new().with_spotlight();
    view.set_slot_text(Slot::SpotlightTitle, "previous");

    render_spotlight(&state, &mut view, &StubFormatter, at(2025, 2, 1));

    assert_eq!(view.slot(Slot::SpotlightTitle), "previous");
}
