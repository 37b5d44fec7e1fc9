//! One function per view region. Every projector reads [`AppState`] and
//! rewrites its region completely, so calling it twice changes nothing.

use chrono::NaiveDateTime;

use crate::{format::DateFormatter, state::AppState, view::ViewSink};

mod agenda;
mod milestones;
mod programs;
mod spotlight;
mod text;

pub use agenda::render_agenda;
pub use milestones::render_milestones;
pub use programs::{render_programs, resolve_category};
pub use spotlight::{render_spotlight, select_spotlight};
pub use text::render_text;

/// Full re-projection in fixed order: text, agenda, spotlight, milestones,
/// programs. Programs keep whichever tab the view has active.
pub fn render_all<V, F>(state: &AppState, view: &mut V, formatter: &F, now: NaiveDateTime)
where
    V: ViewSink + ?Sized,
    F: DateFormatter + ?Sized,
{
    render_text(state, view);
    render_agenda(state, view, formatter);
    render_spotlight(state, view, formatter, now);
    render_milestones(state, view);
    render_programs(state, view, None);
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
