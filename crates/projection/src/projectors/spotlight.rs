use chrono::NaiveDateTime;
use shared::{AgendaEntry, TranslationTree};

use crate::{
    format::{locale_tag, DateFormatter, DateStyle},
    state::AppState,
    view::{Slot, ViewSink},
};

/// Soonest entry starting at or after `now`; the earliest entry overall when
/// everything is in the past. Entries with the same start keep source order.
pub fn select_spotlight(agenda: &[AgendaEntry], now: NaiveDateTime) -> Option<&AgendaEntry> {
    let mut sorted: Vec<&AgendaEntry> = agenda.iter().collect();
    sorted.sort_by_key(|entry| entry.starts_at());

    sorted
        .iter()
        .copied()
        .find(|entry| entry.starts_at() >= now)
        .or_else(|| sorted.first().copied())
}

fn call_to_action(tree: &TranslationTree) -> &str {
    tree.resolve("hero.ctaSpotlight")
        .filter(|text| !text.is_empty())
        .or_else(|| tree.resolve("hero.ctaPrimary"))
        .unwrap_or_default()
}

pub fn render_spotlight<V, F>(state: &AppState, view: &mut V, formatter: &F, now: NaiveDateTime)
where
    V: ViewSink + ?Sized,
    F: DateFormatter + ?Sized,
{
    if !view.has_spotlight() {
        return;
    }
    let Some(tree) = state.translation() else {
        return;
    };

    match select_spotlight(&state.agenda, now) {
        Some(entry) => {
            let date = formatter.format(
                entry.starts_at(),
                locale_tag(&state.lang),
                DateStyle::Spotlight,
            );
            let meta = format!(
                "{date} · {} · {} · {}",
                entry.clock_time(),
                entry.city,
                entry.venue
            );
            view.set_slot_text(Slot::SpotlightTitle, &entry.program);
            view.set_slot_text(Slot::SpotlightMeta, &meta);
            view.set_slot_text(Slot::SpotlightNotes, entry.notes_or_empty());
        }
        None => {
            let placeholder = tree.resolve("hero.emptySpotlight").unwrap_or_default();
            view.set_slot_text(Slot::SpotlightTitle, placeholder);
            view.set_slot_text(Slot::SpotlightMeta, "");
            view.set_slot_text(Slot::SpotlightNotes, "");
        }
    }

    view.set_slot_text(Slot::SpotlightCta, call_to_action(tree));
}

#[cfg(test)]
#[path = "tests/spotlight_tests.rs"]
mod tests;
