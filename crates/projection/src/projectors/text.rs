use tracing::{debug, warn};

use crate::{
    state::AppState,
    view::{Slot, ViewSink},
};

const PLACEHOLDERS: [(Slot, &str); 3] = [
    (Slot::NamePlaceholder, "contact.form.nameLabel"),
    (Slot::EmailPlaceholder, "contact.form.emailLabel"),
    (Slot::MessagePlaceholder, "contact.form.messageLabel"),
];

/// Writes the current language onto every translatable node, the form
/// placeholders and the document language. Nodes whose key does not resolve
/// to a string keep their text.
pub fn render_text<V: ViewSink + ?Sized>(state: &AppState, view: &mut V) {
    let Some(tree) = state.translation() else {
        debug!(lang = %state.lang, "no translations for language; text left as is");
        return;
    };

    view.set_document_lang(state.lang.as_str());

    let mut missing = 0usize;
    for key in view.translatable_keys() {
        match tree.resolve(&key) {
            Some(text) => view.set_translated_text(&key, text),
            None => missing += 1,
        }
    }
    if missing > 0 {
        debug!(lang = %state.lang, missing, "translatable nodes without a string leaf");
    }

    for (slot, path) in PLACEHOLDERS {
        match tree.resolve(path) {
            Some(text) => view.set_slot_text(slot, text),
            None => warn!(lang = %state.lang, path, "form placeholder missing"),
        }
    }
}
