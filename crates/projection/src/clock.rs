use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use chrono::{Local, NaiveDateTime};

/// Source of "now". Wall time drives spotlight selection, the monotonic
/// instant drives the carousel timer.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn instant(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    wall: Cell<NaiveDateTime>,
    origin: Instant,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn new(wall: NaiveDateTime) -> Self {
        Self {
            wall: Cell::new(wall),
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
        if let Ok(delta) = chrono::Duration::from_std(by) {
            self.wall.set(self.wall.get() + delta);
        }
    }

    pub fn set_wall(&self, wall: NaiveDateTime) {
        self.wall.set(wall);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.wall.get()
    }

    fn instant(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}
