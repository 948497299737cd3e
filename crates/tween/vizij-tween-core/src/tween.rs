//! The uniform node surface every tween kind implements, plus the shared
//! elapsed/duration clock used by timed leaves.

use log::warn;

use crate::duration::DurationInfo;

/// A node in a tween tree.
///
/// The host calls [`Tween::advance`] on the root once per frame. The call
/// recurses through the tree, writing Tweenable cells as a side effect, and
/// returns the part of `dt` the node did not consume ("overflow").
pub trait Tween {
    /// Advance by `dt` seconds and return the unconsumed remainder.
    fn advance(&mut self, dt: f32) -> f32;

    fn is_done(&self) -> bool;

    /// Return to the unstarted state. Started leaves write their captured
    /// starting value back to their cell.
    fn reset(&mut self);

    /// Reset, then move to `time` seconds from the start. Idempotent.
    fn seek_to(&mut self, time: f32);

    /// Force the terminal state and apply final values in one pass.
    fn skip_to_end(&mut self);

    fn total_duration(&self) -> DurationInfo;

    fn boxed(self) -> Box<dyn Tween>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<T: Tween + ?Sized> Tween for Box<T> {
    fn advance(&mut self, dt: f32) -> f32 {
        (**self).advance(dt)
    }
    fn is_done(&self) -> bool {
        (**self).is_done()
    }
    fn reset(&mut self) {
        (**self).reset()
    }
    fn seek_to(&mut self, time: f32) {
        (**self).seek_to(time)
    }
    fn skip_to_end(&mut self) {
        (**self).skip_to_end()
    }
    fn total_duration(&self) -> DurationInfo {
        (**self).total_duration()
    }
}

/// Negative or NaN deltas are treated as zero.
pub(crate) fn sanitize_dt(dt: f32) -> f32 {
    if dt >= 0.0 {
        dt
    } else {
        warn!("ignoring invalid tween delta {dt}; using 0");
        0.0
    }
}

/// Elapsed/duration bookkeeping shared by leaf tweens and waits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Clock {
    duration: f32,
    elapsed: f32,
    started: bool,
}

impl Clock {
    pub(crate) fn new(duration: f32) -> Self {
        // max() maps NaN to 0 as well.
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            started: false,
        }
    }

    #[inline]
    pub(crate) fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Add `dt`, saturate at the duration and return the overflow.
    pub(crate) fn tick(&mut self, dt: f32) -> f32 {
        self.started = true;
        self.elapsed += sanitize_dt(dt);
        let overflow = (self.elapsed - self.duration).max(0.0);
        self.elapsed = self.elapsed.min(self.duration);
        overflow
    }

    pub(crate) fn seek(&mut self, time: f32) {
        self.started = true;
        self.elapsed = time.max(0.0).min(self.duration);
    }

    pub(crate) fn finish(&mut self) {
        self.started = true;
        self.elapsed = self.duration;
    }

    pub(crate) fn reset(&mut self) {
        self.started = false;
        self.elapsed = 0.0;
    }

    /// Elapsed fraction in [0, 1]. A zero-length clock is always at 1.
    pub(crate) fn percent(&self) -> f32 {
        if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        }
    }

    /// Zero-length clocks only count as done once they have been ticked.
    pub(crate) fn is_done(&self) -> bool {
        self.started && self.elapsed >= self.duration
    }

    pub(crate) fn info(&self) -> DurationInfo {
        DurationInfo::known(self.duration, self.elapsed)
    }
}
