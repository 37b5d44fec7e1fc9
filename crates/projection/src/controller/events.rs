//! User-triggered entry points of the page.

use shared::{CategoryKey, LanguageCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteEvent {
    SetLanguage(LanguageCode),
    SelectCategory(CategoryKey),
    ToggleNav,
    CarouselPrev,
    CarouselNext,
    CarouselDot(usize),
    /// Timer turn: advances the carousel if its deadline has passed.
    CarouselTick,
}

impl SiteEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SiteEvent::SetLanguage(_) => "set_language",
            SiteEvent::SelectCategory(_) => "select_category",
            SiteEvent::ToggleNav => "toggle_nav",
            SiteEvent::CarouselPrev => "carousel_prev",
            SiteEvent::CarouselNext => "carousel_next",
            SiteEvent::CarouselDot(_) => "carousel_dot",
            SiteEvent::CarouselTick => "carousel_tick",
        }
    }
}
