//! In-memory page used by the preview app and by tests.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use super::{
    AgendaCard, CarouselSurface, ControlGroup, ProgramCard, Region, Slot, ViewItem, ViewSink,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    pub key: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlNode {
    pub key: String,
    pub label: String,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_selected: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DotNode {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    pub document_lang: Option<String>,
    pub text_nodes: Vec<TextNode>,
    pub spotlight: bool,
    pub slots: BTreeMap<Slot, String>,
    pub agenda: Vec<AgendaCard>,
    pub milestones: Vec<String>,
    pub programs: Vec<ProgramCard>,
    pub language_buttons: Vec<ControlNode>,
    pub tabs: Vec<ControlNode>,
    pub nav_open: bool,
    pub nav_expanded: bool,
    pub slide_count: usize,
    pub dots: Vec<DotNode>,
    pub track_offset: i64,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_node(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.text_nodes.push(TextNode {
            key: key.into(),
            text: text.into(),
        });
        self
    }

    pub fn with_spotlight(mut self) -> Self {
        self.spotlight = true;
        self
    }

    pub fn with_language_buttons(mut self, codes: &[&str]) -> Self {
        self.language_buttons = codes
            .iter()
            .map(|code| ControlNode {
                key: code.to_string(),
                label: code.to_ascii_uppercase(),
                active: false,
                aria_selected: None,
            })
            .collect();
        self
    }

    pub fn with_tabs(mut self, keys: &[&str]) -> Self {
        self.tabs = keys
            .iter()
            .map(|key| ControlNode {
                key: key.to_string(),
                label: key.to_string(),
                active: false,
                aria_selected: Some(false),
            })
            .collect();
        self
    }

    pub fn with_active_tab(mut self, key: &str) -> Self {
        for tab in &mut self.tabs {
            tab.active = tab.key == key;
            tab.aria_selected = Some(tab.active);
        }
        self
    }

    pub fn with_slides(mut self, count: usize) -> Self {
        self.slide_count = count;
        self
    }

    /// Text of the first node tagged with `key`.
    pub fn text_of(&self, key: &str) -> Option<&str> {
        self.text_nodes
            .iter()
            .find(|node| node.key == key)
            .map(|node| node.text.as_str())
    }

    pub fn slot(&self, slot: Slot) -> &str {
        self.slots
            .get(&slot)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn tab(&self, key: &str) -> Option<&ControlNode> {
        self.tabs.iter().find(|tab| tab.key == key)
    }

    pub fn active_tabs(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|tab| tab.active)
            .map(|tab| tab.key.as_str())
            .collect()
    }

    pub fn active_languages(&self) -> Vec<&str> {
        self.language_buttons
            .iter()
            .filter(|button| button.active)
            .map(|button| button.key.as_str())
            .collect()
    }

    pub fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| dot.active)
            .map(|(index, _)| index)
            .collect()
    }

    fn controls_mut(&mut self, group: ControlGroup) -> &mut Vec<ControlNode> {
        match group {
            ControlGroup::Language => &mut self.language_buttons,
            ControlGroup::CategoryTab => &mut self.tabs,
        }
    }

    fn controls(&self, group: ControlGroup) -> &[ControlNode] {
        match group {
            ControlGroup::Language => &self.language_buttons,
            ControlGroup::CategoryTab => &self.tabs,
        }
    }
}

impl ViewSink for MemoryView {
    fn translatable_keys(&self) -> Vec<String> {
        self.text_nodes
            .iter()
            .map(|node| node.key.clone())
            .collect()
    }

    fn set_translated_text(&mut self, key: &str, text: &str) {
        for node in self.text_nodes.iter_mut().filter(|node| node.key == key) {
            node.text = text.to_string();
        }
    }

    fn set_document_lang(&mut self, code: &str) {
        self.document_lang = Some(code.to_string());
    }

    fn has_spotlight(&self) -> bool {
        self.spotlight
    }

    fn set_slot_text(&mut self, slot: Slot, text: &str) {
        self.slots.insert(slot, text.to_string());
    }

    fn clear(&mut self, region: Region) {
        match region {
            Region::Agenda => self.agenda.clear(),
            Region::Milestones => self.milestones.clear(),
            Region::Programs => self.programs.clear(),
        }
    }

    fn append(&mut self, region: Region, item: ViewItem) {
        match (region, item) {
            (Region::Agenda, ViewItem::AgendaCard(card)) => self.agenda.push(card),
            (Region::Milestones, ViewItem::Milestone(text)) => self.milestones.push(text),
            (Region::Programs, ViewItem::Program(card)) => self.programs.push(card),
            (region, item) => {
                tracing::debug!(?region, ?item, "item does not belong to region; dropped");
            }
        }
    }

    fn control_keys(&self, group: ControlGroup) -> Vec<String> {
        self.controls(group)
            .iter()
            .map(|control| control.key.clone())
            .collect()
    }

    fn active_control(&self, group: ControlGroup) -> Option<String> {
        self.controls(group)
            .iter()
            .find(|control| control.active)
            .map(|control| control.key.clone())
    }

    fn set_control_active(&mut self, group: ControlGroup, key: &str, active: bool) {
        for control in self
            .controls_mut(group)
            .iter_mut()
            .filter(|control| control.key == key)
        {
            control.active = active;
            if group == ControlGroup::CategoryTab {
                control.aria_selected = Some(active);
            }
        }
    }

    fn set_control_label(&mut self, group: ControlGroup, key: &str, label: &str) {
        for control in self
            .controls_mut(group)
            .iter_mut()
            .filter(|control| control.key == key)
        {
            control.label = label.to_string();
        }
    }

    fn nav_open(&self) -> bool {
        self.nav_open
    }

    fn set_nav_open(&mut self, open: bool) {
        self.nav_open = open;
        self.nav_expanded = open;
    }
}

impl CarouselSurface for MemoryView {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn clear_dots(&mut self) {
        self.dots.clear();
    }

    fn append_dot(&mut self, label: &str) {
        self.dots.push(DotNode {
            label: label.to_string(),
            active: false,
        });
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            dot.active = active;
        }
    }

    fn set_track_offset(&mut self, percent: i64) {
        self.track_offset = percent;
    }
}

fn mark(active: bool) -> &'static str {
    if active {
        "*"
    } else {
        " "
    }
}

impl fmt::Display for MemoryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<html lang=\"{}\">",
            self.document_lang.as_deref().unwrap_or_default()
        )?;

        let languages: Vec<String> = self
            .language_buttons
            .iter()
            .map(|b| format!("[{}{}]", mark(b.active), b.label))
            .collect();
        writeln!(
            f,
            "nav ({}) {}",
            if self.nav_open { "open" } else { "closed" },
            languages.join(" ")
        )?;

        writeln!(f, "\n# text")?;
        for node in &self.text_nodes {
            writeln!(f, "{:<32} {}", node.key, node.text)?;
        }

        if self.spotlight {
            writeln!(f, "\n# spotlight")?;
            for slot in [
                Slot::SpotlightTitle,
                Slot::SpotlightMeta,
                Slot::SpotlightNotes,
                Slot::SpotlightCta,
            ] {
                writeln!(f, "{:<16} {}", format!("{slot:?}"), self.slot(slot))?;
            }
        }

        writeln!(f, "\n# agenda")?;
        for card in &self.agenda {
            writeln!(f, "- {}\n  {}\n  {}", card.when, card.place, card.program)?;
            if !card.notes.is_empty() {
                writeln!(f, "  {}", card.notes)?;
            }
        }

        writeln!(f, "\n# milestones")?;
        for milestone in &self.milestones {
            writeln!(f, "- {milestone}")?;
        }

        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|t| format!("[{}{}]", mark(t.active), t.label))
            .collect();
        writeln!(f, "\n# programs {}", tabs.join(" "))?;
        for program in &self.programs {
            writeln!(f, "- {}", program.title)?;
            for item in &program.items {
                writeln!(f, "    {item}")?;
            }
        }

        if self.slide_count > 0 {
            let dots: String = self
                .dots
                .iter()
                .map(|d| if d.active { '●' } else { '○' })
                .collect();
            writeln!(
                f,
                "\n# carousel {} slides, offset {}% {}",
                self.slide_count, self.track_offset, dots
            )?;
        }

        Ok(())
    }
}
