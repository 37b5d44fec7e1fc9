//! Builds the in-memory page the preview projects into. Without an HTML
//! template, the page shape is derived from the loaded data itself.

use projection::MemoryView;
use shared::{LanguageCode, SiteData};

/// Leaves rendered by dedicated projectors rather than as plain text nodes.
const NON_TEXT_PREFIXES: [&str; 3] = ["programs.tabs.", "contact.form.", "about.milestones"];

pub fn scaffold_view(data: &SiteData, lang: &LanguageCode, slides: usize) -> MemoryView {
    let tree = data
        .translations
        .get(lang)
        .or_else(|| data.translations.values().next());

    let mut view = MemoryView::new().with_spotlight();
    if let Some(tree) = tree {
        for key in tree.leaf_paths() {
            if NON_TEXT_PREFIXES.iter().any(|p| key.starts_with(p)) {
                continue;
            }
            view = view.with_text_node(key, "");
        }
    }

    let codes: Vec<&str> = data.translations.keys().map(LanguageCode::as_str).collect();
    let tabs: Vec<&str> = data.programs.keys().map(|key| key.as_str()).collect();

    view.with_language_buttons(&codes)
        .with_tabs(&tabs)
        .with_slides(slides)
}

#[cfg(test)]
#[path = "tests/scaffold_tests.rs"]
mod tests;
