//! Timing primitives that touch no cell: a pure delay and a fire-once action.

use std::fmt;

use crate::duration::DurationInfo;
use crate::tween::{sanitize_dt, Clock, Tween};

/// Pure delay. Same timing and overflow arithmetic as a leaf tween.
#[derive(Clone, Debug)]
pub struct Wait {
    clock: Clock,
}

impl Wait {
    pub fn new(duration: f32) -> Self {
        Self {
            clock: Clock::new(duration),
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }
}

impl Tween for Wait {
    fn advance(&mut self, dt: f32) -> f32 {
        self.clock.tick(dt)
    }

    /// `Wait(0)` reports not-done until its first advance, seek or skip.
    fn is_done(&self) -> bool {
        self.clock.is_done()
    }

    fn reset(&mut self) {
        self.clock.reset();
    }

    fn seek_to(&mut self, time: f32) {
        self.clock.seek(time);
    }

    fn skip_to_end(&mut self) {
        self.clock.finish();
    }

    fn total_duration(&self) -> DurationInfo {
        self.clock.info()
    }
}

/// Zero-length node that runs `action` exactly once, on the first
/// advance/seek/skip that finds it un-fired. Only `reset` re-arms it.
pub struct Callback<F> {
    action: F,
    fired: bool,
}

impl<F: FnMut()> Callback<F> {
    pub fn new(action: F) -> Self {
        Self {
            action,
            fired: false,
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    fn fire(&mut self) {
        if !self.fired {
            self.fired = true;
            (self.action)();
        }
    }
}

impl<F: FnMut()> Tween for Callback<F> {
    fn advance(&mut self, dt: f32) -> f32 {
        self.fire();
        sanitize_dt(dt)
    }

    fn is_done(&self) -> bool {
        self.fired
    }

    fn reset(&mut self) {
        self.fired = false;
    }

    fn seek_to(&mut self, _time: f32) {
        self.fire();
    }

    fn skip_to_end(&mut self) {
        self.fire();
    }

    fn total_duration(&self) -> DurationInfo {
        DurationInfo::known(0.0, 0.0)
    }
}

impl<F> fmt::Debug for Callback<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}
