//! The capability surface projectors write to.
//!
//! A real page (DOM, terminal, native widgets) implements [`ViewSink`] and,
//! when it has a carousel, [`CarouselSurface`]. [`memory::MemoryView`] is the
//! in-process implementation.

use serde::Serialize;

pub mod memory;

/// Single-text nodes addressed by role rather than by translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    SpotlightTitle,
    SpotlightMeta,
    SpotlightNotes,
    SpotlightCta,
    NamePlaceholder,
    EmailPlaceholder,
    MessagePlaceholder,
}

/// Containers that are cleared and rebuilt on every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Agenda,
    Milestones,
    Programs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlGroup {
    /// Language selector buttons, keyed by language code.
    Language,
    /// Program category tabs, keyed by category key.
    CategoryTab,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaCard {
    /// Formatted date and time, `"{date} · {time}"`.
    pub when: String,
    /// `"{city} · {venue}"`.
    pub place: String,
    pub program: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramCard {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum ViewItem {
    AgendaCard(AgendaCard),
    Milestone(String),
    Program(ProgramCard),
}

pub trait ViewSink {
    /// Translation keys of every translatable node, one entry per node.
    fn translatable_keys(&self) -> Vec<String>;
    /// Replaces the text of every node tagged with `key`.
    fn set_translated_text(&mut self, key: &str, text: &str);
    fn set_document_lang(&mut self, code: &str);

    fn has_spotlight(&self) -> bool;
    fn set_slot_text(&mut self, slot: Slot, text: &str);

    fn clear(&mut self, region: Region);
    fn append(&mut self, region: Region, item: ViewItem);

    /// Keys of the controls in `group`, in page order.
    fn control_keys(&self, group: ControlGroup) -> Vec<String>;
    /// Key of the first control in `group` currently marked active.
    fn active_control(&self, group: ControlGroup) -> Option<String>;
    /// Sets the active flag. Category tabs mirror it on their selected state.
    fn set_control_active(&mut self, group: ControlGroup, key: &str, active: bool);
    fn set_control_label(&mut self, group: ControlGroup, key: &str, label: &str);

    fn nav_open(&self) -> bool;
    /// Opens or closes the navigation menu and mirrors it on the toggle's
    /// expanded state.
    fn set_nav_open(&mut self, open: bool);
}

pub trait CarouselSurface {
    fn slide_count(&self) -> usize;
    fn clear_dots(&mut self);
    fn append_dot(&mut self, label: &str);
    fn set_dot_active(&mut self, index: usize, active: bool);
    /// Horizontal track translation in percent of one slide width.
    fn set_track_offset(&mut self, percent: i64);
}
