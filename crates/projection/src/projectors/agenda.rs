use crate::{
    format::{locale_tag, DateFormatter, DateStyle},
    state::AppState,
    view::{AgendaCard, Region, ViewItem, ViewSink},
};

/// Rebuilds the agenda list in source order.
pub fn render_agenda<V, F>(state: &AppState, view: &mut V, formatter: &F)
where
    V: ViewSink + ?Sized,
    F: DateFormatter + ?Sized,
{
    let locale = locale_tag(&state.lang);
    view.clear(Region::Agenda);

    for entry in &state.agenda {
        let date = formatter.format(entry.starts_at(), locale, DateStyle::Card);
        let card = AgendaCard {
            when: format!("{date} · {}", entry.clock_time()),
            place: format!("{} · {}", entry.city, entry.venue),
            program: entry.program.clone(),
            notes: entry.notes_or_empty().to_string(),
        };
        view.append(Region::Agenda, ViewItem::AgendaCard(card));
    }
}
