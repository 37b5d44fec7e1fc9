//! Projection of the site state onto a view.
//!
//! One [`AppState`] holds the language, translations, agenda and program
//! catalog. Each projector in [`projectors`] reads it and rewrites one region
//! of a [`ViewSink`]; running them again with unchanged state produces the
//! same view. [`Page`] owns the state and routes user events to the
//! projectors. The [`Carousel`] is independent of the state and only touches
//! a [`CarouselSurface`].

pub mod carousel;
pub mod clock;
pub mod controller;
pub mod format;
pub mod projectors;
pub mod state;
pub mod view;

pub use carousel::{Carousel, AUTO_ADVANCE_INTERVAL};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{events::SiteEvent, Page, PageOptions};
pub use format::{locale_tag, ChronoDateFormatter, DateFormatter, DateStyle};
pub use projectors::render_all;
pub use state::{AppState, DEFAULT_CATEGORY, FALLBACK_LANGUAGE};
pub use view::{
    memory::MemoryView, AgendaCard, CarouselSurface, ControlGroup, ProgramCard, Region, Slot,
    ViewItem, ViewSink,
};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
