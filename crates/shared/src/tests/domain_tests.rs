use super::*;
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

fn tree() -> TranslationTree {
    TranslationTree(json!({
        "hero": { "title": "Hola", "count": 3 },
        "about": { "milestones": ["1998", 42, "2004"] },
        "contact": { "form": { "nameLabel": "Nombre" } }
    }))
}

#[test]
fn resolves_nested_string_leaf() {
    assert_eq!(tree().resolve("contact.form.nameLabel"), Some("Nombre"));
    assert_eq!(tree().resolve("hero.title"), Some("Hola"));
}

#[test]
fn non_string_and_missing_paths_resolve_to_none() {
    let tree = tree();
    assert_eq!(tree.resolve("hero"), None);
    assert_eq!(tree.resolve("hero.count"), None);
    assert_eq!(tree.resolve("hero.title.deeper"), None);
    assert_eq!(tree.resolve("nope.nothing"), None);
    assert_eq!(tree.resolve(""), None);
}

#[test]
fn array_segments_are_indexed_numerically() {
    assert_eq!(tree().resolve("about.milestones.0"), Some("1998"));
    assert_eq!(tree().resolve("about.milestones.1"), None);
    assert_eq!(tree().resolve("about.milestones.x"), None);
}

#[test]
fn string_list_skips_non_strings() {
    assert_eq!(tree().string_list("about.milestones"), vec!["1998", "2004"]);
    assert!(tree().string_list("hero.title").is_empty());
}

#[test]
fn leaf_paths_list_only_string_leaves() {
    assert_eq!(
        tree().leaf_paths(),
        vec!["contact.form.nameLabel".to_string(), "hero.title".to_string()]
    );
}

#[test]
fn agenda_entry_defaults_time_to_midnight() {
    let entry: AgendaEntry = serde_json::from_value(json!({
        "date": "2025-03-01",
        "city": "Sevilla",
        "venue": "Catedral",
        "program": "Vísperas"
    }))
    .expect("agenda entry");

    assert_eq!(entry.clock_time().as_str(), "00:00");
    assert_eq!(
        entry.starts_at(),
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .expect("date")
            .and_hms_opt(0, 0, 0)
            .expect("time")
    );
    assert_eq!(entry.notes_or_empty(), "");
}

#[test]
fn agenda_entry_keeps_time_text_and_orders_by_it() {
    let entry: AgendaEntry = serde_json::from_value(json!({
        "date": "2025-03-01",
        "time": "19:30",
        "city": "Sevilla",
        "venue": "Catedral",
        "program": "Vísperas",
        "notes": "Entrada libre"
    }))
    .expect("agenda entry");

    assert_eq!(entry.clock_time().to_string(), "19:30");
    assert_eq!(entry.starts_at().format("%H:%M").to_string(), "19:30");
    assert_eq!(entry.notes_or_empty(), "Entrada libre");
}

#[test]
fn blank_time_counts_as_missing() {
    let agenda: Vec<AgendaEntry> = serde_json::from_str(
        r#"[
            { "date": "2025-02-15", "time": "", "city": "Toledo", "venue": "San Juan", "program": "Lamentaciones" },
            { "date": "2025-02-16", "time": "  ", "city": "Toledo", "venue": "San Juan", "program": "Tinieblas" },
            { "date": "2025-02-17", "time": null, "city": "Toledo", "venue": "San Juan", "program": "Laudes" }
        ]"#,
    )
    .expect("agenda with blank times");

    for entry in &agenda {
        assert_eq!(entry.time, None, "{}", entry.program);
        assert_eq!(entry.clock_time().as_str(), ClockTime::DEFAULT);
        assert_eq!(entry.starts_at(), entry.date.and_time(NaiveTime::MIN));
    }
}

#[test]
fn malformed_time_is_rejected() {
    let result = serde_json::from_value::<AgendaEntry>(json!({
        "date": "2025-03-01",
        "time": "half past seven",
        "city": "Sevilla",
        "venue": "Catedral",
        "program": "Vísperas"
    }));
    assert!(result.is_err());
}

#[test]
fn load_error_names_resource() {
    let err = LoadError::new(Resource::Agenda, LoadErrorKind::Status, "404 Not Found");
    assert_eq!(
        err.to_string(),
        "failed to load agenda (Status): 404 Not Found"
    );
    assert_eq!(Resource::Programs.relative_path(), "data/programs.json");
}
