//! Sequential composition: children run one after another.

use std::fmt;

use log::trace;

use crate::duration::DurationInfo;
use crate::tween::{sanitize_dt, Tween};
use crate::wait::{Callback, Wait};

/// Runs children in order. Time left over when a child finishes is handed to
/// the next child within the same `advance` call, so a run of zero-length
/// steps completes in one frame instead of one frame per step.
#[derive(Default)]
pub struct Sequence {
    children: Vec<Box<dyn Tween>>,
    current: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn add(mut self, node: impl Tween + 'static) -> Self {
        self.push(node);
        self
    }

    pub fn push(&mut self, node: impl Tween + 'static) {
        self.children.push(Box::new(node));
    }

    pub fn then_wait(self, duration: f32) -> Self {
        self.add(Wait::new(duration))
    }

    pub fn then_call(self, action: impl FnMut() + 'static) -> Self {
        self.add(Callback::new(action))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Index of the running child; equals `len()` once finished.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn child(&self, index: usize) -> Option<&dyn Tween> {
        self.children.get(index).map(|c| c.as_ref())
    }
}

impl Tween for Sequence {
    fn advance(&mut self, mut dt: f32) -> f32 {
        loop {
            let Some(child) = self.children.get_mut(self.current) else {
                return sanitize_dt(dt);
            };
            let overflow = child.advance(dt);
            if !child.is_done() {
                return overflow;
            }
            self.current += 1;
            trace!(
                "sequence step {} done, carrying {overflow}s forward",
                self.current - 1
            );
            dt = overflow;
        }
    }

    fn is_done(&self) -> bool {
        self.current >= self.children.len()
    }

    fn reset(&mut self) {
        // Reverse order so chained leaves on one cell restore the earliest start.
        for child in self.children.iter_mut().rev() {
            child.reset();
        }
        self.current = 0;
    }

    fn seek_to(&mut self, time: f32) {
        self.reset();
        let mut remaining = time.max(0.0);
        while let Some(child) = self.children.get_mut(self.current) {
            match child.total_duration() {
                DurationInfo::Known { value, .. } if remaining >= value => {
                    child.skip_to_end();
                    remaining -= value;
                    self.current += 1;
                }
                DurationInfo::Known { .. } => {
                    child.advance(remaining);
                    return;
                }
                DurationInfo::Unknown => {
                    // Unbuilt subtree: its length is only known once it runs,
                    // so drive it with the remaining time and walk on with
                    // whatever it leaves over.
                    let overflow = child.advance(remaining);
                    if !child.is_done() {
                        return;
                    }
                    self.current += 1;
                    remaining = overflow;
                }
            }
        }
    }

    fn skip_to_end(&mut self) {
        for child in self.children.iter_mut().skip(self.current) {
            child.skip_to_end();
        }
        self.current = self.children.len();
    }

    fn total_duration(&self) -> DurationInfo {
        let mut value = 0.0;
        let mut elapsed = 0.0;
        for child in &self.children {
            match child.total_duration() {
                DurationInfo::Known {
                    value: v,
                    elapsed: e,
                } => {
                    value += v;
                    elapsed += e;
                }
                DurationInfo::Unknown => return DurationInfo::Unknown,
            }
        }
        DurationInfo::known(value, elapsed)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.children.len())
            .field("current", &self.current)
            .finish()
    }
}
