//! Image carousel: a wrapping slide index plus one auto-advance deadline.
//!
//! The timer is not a background task. It is a single deadline that the
//! owner polls; every navigation replaces it, so at most one pending
//! advance exists per carousel.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::view::CarouselSurface;

pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    interval: Duration,
    deadline: Option<Instant>,
}

impl Carousel {
    /// Builds the dot indicators, shows slide 0 and arms the timer.
    /// Returns `None` when the surface has no slides.
    pub fn init<S: CarouselSurface + ?Sized>(
        surface: &mut S,
        interval: Duration,
        now: Instant,
    ) -> Option<Self> {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            debug!("carousel has no slides; not starting");
            return None;
        }

        surface.clear_dots();
        for index in 0..slide_count {
            surface.append_dot(&format!("Slide {}", index + 1));
        }

        let mut carousel = Self {
            slide_count,
            current: 0,
            interval,
            deadline: None,
        };
        carousel.update(surface);
        carousel.restart(now);
        Some(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Shows slide `index` modulo the slide count (negative indices wrap
    /// from the end) and restarts the countdown.
    pub fn go_to<S: CarouselSurface + ?Sized>(
        &mut self,
        index: i64,
        surface: &mut S,
        now: Instant,
    ) {
        let count = self.slide_count as i64;
        self.current = index.rem_euclid(count) as usize;
        self.update(surface);
        self.restart(now);
    }

    pub fn next<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) {
        self.go_to(self.current as i64 + 1, surface, now);
    }

    pub fn prev<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) {
        self.go_to(self.current as i64 - 1, surface, now);
    }

    /// Advances one slide if the deadline has passed. A poll that comes
    /// several intervals late still advances only once.
    pub fn poll<S: CarouselSurface + ?Sized>(&mut self, surface: &mut S, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.next(surface, now);
                true
            }
            _ => false,
        }
    }

    pub fn stop(&mut self) {
        self.deadline = None;
    }

    fn restart(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    fn update<S: CarouselSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_track_offset(-(self.current as i64) * 100);
        for index in 0..self.slide_count {
            surface.set_dot_active(index, index == self.current);
        }
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
