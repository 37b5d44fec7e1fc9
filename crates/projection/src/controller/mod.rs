//! The page controller: owns the state and the view, and turns user events
//! into state changes followed by the matching projections.

use std::time::Duration;

use shared::{CategoryKey, LanguageCode, SiteData};
use tracing::{debug, info};

use crate::{
    carousel::{Carousel, AUTO_ADVANCE_INTERVAL},
    clock::Clock,
    format::DateFormatter,
    projectors,
    state::{AppState, FALLBACK_LANGUAGE},
    view::{CarouselSurface, ControlGroup, ViewSink},
};

pub mod events;

use events::SiteEvent;

#[derive(Debug, Clone)]
pub struct PageOptions {
    pub initial_language: LanguageCode,
    pub carousel_interval: Duration,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            initial_language: LanguageCode::from(FALLBACK_LANGUAGE),
            carousel_interval: AUTO_ADVANCE_INTERVAL,
        }
    }
}

pub struct Page<V, F, C> {
    state: AppState,
    view: V,
    formatter: F,
    clock: C,
    carousel: Option<Carousel>,
    carousel_interval: Duration,
}

impl<V, F, C> Page<V, F, C>
where
    V: ViewSink + CarouselSurface,
    F: DateFormatter,
    C: Clock,
{
    pub fn new(view: V, formatter: F, clock: C, options: PageOptions) -> Self {
        Self {
            state: AppState::new(options.initial_language),
            view,
            formatter,
            clock,
            carousel: None,
            carousel_interval: options.carousel_interval,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// Installs freshly loaded data and projects everything once.
    pub fn load(&mut self, data: SiteData) {
        self.state.apply(data);
        info!(lang = %self.state.lang, "site data applied");
        self.sync_language_controls();
        self.render_all();
    }

    pub fn render_all(&mut self) {
        let now = self.clock.now();
        projectors::render_all(&self.state, &mut self.view, &self.formatter, now);
    }

    /// Switches language without validating the code, then re-projects
    /// everything. Unknown codes leave translated text untouched.
    pub fn set_language(&mut self, code: LanguageCode) {
        if !self.state.is_supported(&code) {
            debug!(lang = %code, "switching to a language without translations");
        }
        self.state.lang = code;
        self.sync_language_controls();
        self.render_all();
    }

    pub fn select_category(&mut self, category: &CategoryKey) -> CategoryKey {
        projectors::render_programs(&self.state, &mut self.view, Some(category))
    }

    pub fn toggle_nav(&mut self) -> bool {
        let open = !self.view.nav_open();
        self.view.set_nav_open(open);
        open
    }

    /// Starts the carousel once. Later calls, and calls on a page without
    /// slides, do nothing. Returns whether a carousel is running afterwards.
    pub fn init_carousel(&mut self) -> bool {
        if self.carousel.is_none() {
            let now = self.clock.instant();
            self.carousel = Carousel::init(&mut self.view, self.carousel_interval, now);
        }
        self.carousel.is_some()
    }

    pub fn dispatch(&mut self, event: SiteEvent) {
        debug!(event = event.name(), "dispatching site event");
        let now = self.clock.instant();
        match event {
            SiteEvent::SetLanguage(code) => self.set_language(code),
            SiteEvent::SelectCategory(category) => {
                self.select_category(&category);
            }
            SiteEvent::ToggleNav => {
                self.toggle_nav();
            }
            SiteEvent::CarouselPrev => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.prev(&mut self.view, now);
                }
            }
            SiteEvent::CarouselNext => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.next(&mut self.view, now);
                }
            }
            SiteEvent::CarouselDot(index) => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.go_to(index as i64, &mut self.view, now);
                }
            }
            SiteEvent::CarouselTick => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.poll(&mut self.view, now);
                }
            }
        }
    }

    fn sync_language_controls(&mut self) {
        for key in self.view.control_keys(ControlGroup::Language) {
            let active = key == self.state.lang.as_str();
            self.view
                .set_control_active(ControlGroup::Language, &key, active);
        }
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
