//! Leaf tween: interpolates one Tweenable cell toward a target value.

use std::fmt;

use crate::cell::Tweenable;
use crate::duration::DurationInfo;
use crate::tween::{Clock, Tween};

/// Interpolates `cell` from the value it holds when the leaf first runs to
/// `target` over `duration` seconds, shaped by `ease`.
///
/// The starting value is captured lazily on the first tick, so a leaf built
/// long before it runs (e.g. the second step of a chain on the same cell)
/// starts from whatever value is current at that point.
pub struct Leaf<C: Tweenable, E> {
    cell: C,
    target: C::Value,
    ease: E,
    clock: Clock,
    starting: Option<C::Value>,
}

impl<C, E> Leaf<C, E>
where
    C: Tweenable,
    E: Fn(f32) -> f32,
{
    pub fn new(cell: C, target: C::Value, duration: f32, ease: E) -> Self {
        Self {
            cell,
            target,
            ease,
            clock: Clock::new(duration),
            starting: None,
        }
    }

    pub fn target(&self) -> &C::Value {
        &self.target
    }

    /// Seconds elapsed since the leaf started (0 before the first tick).
    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Value captured on the first tick, if the leaf has started.
    pub fn starting_value(&self) -> Option<&C::Value> {
        self.starting.as_ref()
    }

    fn capture_start(&mut self) {
        if self.starting.is_none() {
            self.starting = Some(self.cell.get());
        }
    }

    fn apply(&self) {
        let Some(start) = self.starting.as_ref() else {
            return;
        };
        // The final write is the exact target, whatever the lerp rounding.
        let value = if self.clock.is_done() {
            self.target.clone()
        } else {
            let eased = (self.ease)(self.clock.percent());
            self.cell.lerp(start, &self.target, eased)
        };
        self.cell.set(value);
    }
}

impl<C, E> Tween for Leaf<C, E>
where
    C: Tweenable,
    E: Fn(f32) -> f32,
{
    fn advance(&mut self, dt: f32) -> f32 {
        self.capture_start();
        let overflow = self.clock.tick(dt);
        self.apply();
        overflow
    }

    /// A zero-duration leaf reports not-done until its first advance, seek
    /// or skip, which is also when it captures its start and writes.
    fn is_done(&self) -> bool {
        self.clock.is_done()
    }

    fn reset(&mut self) {
        if let Some(start) = self.starting.take() {
            self.cell.set(start);
        }
        self.clock.reset();
    }

    fn seek_to(&mut self, time: f32) {
        self.capture_start();
        self.clock.seek(time);
        self.apply();
    }

    fn skip_to_end(&mut self) {
        self.capture_start();
        self.clock.finish();
        self.apply();
    }

    fn total_duration(&self) -> DurationInfo {
        self.clock.info()
    }
}

impl<C, E> fmt::Debug for Leaf<C, E>
where
    C: Tweenable,
    C::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("target", &self.target)
            .field("clock", &self.clock)
            .field("starting", &self.starting)
            .finish_non_exhaustive()
    }
}
