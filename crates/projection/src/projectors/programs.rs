use shared::CategoryKey;
use tracing::debug;

use crate::{
    state::{AppState, DEFAULT_CATEGORY},
    view::{ControlGroup, ProgramCard, Region, ViewItem, ViewSink},
};

/// The requested category, else the tab the view has active, else
/// [`DEFAULT_CATEGORY`].
pub fn resolve_category<V: ViewSink + ?Sized>(
    view: &V,
    requested: Option<&CategoryKey>,
) -> CategoryKey {
    let active = view.active_control(ControlGroup::CategoryTab);
    requested
        .cloned()
        .or_else(|| active.map(CategoryKey))
        .unwrap_or_else(|| CategoryKey::from(DEFAULT_CATEGORY))
}

/// Rebuilds the program list for one category and brings every tab in line
/// with it: exactly the matching tab ends up active, and each tab is
/// relabelled from `programs.tabs.<key>` in the current language.
///
/// Exactly one tab is active afterwards only if the page has a tab for the
/// rendered category. Otherwise the list still shows that category and every
/// tab is left inactive.
///
/// Returns the category that was rendered.
pub fn render_programs<V: ViewSink + ?Sized>(
    state: &AppState,
    view: &mut V,
    category: Option<&CategoryKey>,
) -> CategoryKey {
    let category = resolve_category(view, category);
    let tree = state.translation();

    view.clear(Region::Programs);
    let entries = state.programs_for(&category);
    for entry in entries {
        let card = ProgramCard {
            title: entry.title.clone(),
            items: entry.items.clone(),
        };
        view.append(Region::Programs, ViewItem::Program(card));
    }

    for key in view.control_keys(ControlGroup::CategoryTab) {
        view.set_control_active(ControlGroup::CategoryTab, &key, key == category.as_str());
        let label = tree.and_then(|tree| tree.resolve(&format!("programs.tabs.{key}")));
        if let Some(label) = label {
            view.set_control_label(ControlGroup::CategoryTab, &key, label);
        }
    }

    debug!(%category, entries = entries.len(), "programs rendered");
    category
}
