use crate::{
    state::AppState,
    view::{Region, ViewItem, ViewSink},
};

const MILESTONES_PATH: &str = "about.milestones";

pub fn render_milestones<V: ViewSink + ?Sized>(state: &AppState, view: &mut V) {
    view.clear(Region::Milestones);

    let milestones = state
        .translation()
        .map(|tree| tree.string_list(MILESTONES_PATH))
        .unwrap_or_default();
    for milestone in milestones {
        view.append(Region::Milestones, ViewItem::Milestone(milestone));
    }
}
