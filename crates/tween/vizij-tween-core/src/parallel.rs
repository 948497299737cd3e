//! Concurrent composition: channels share one clock.

use std::fmt;

use crate::duration::DurationInfo;
use crate::tween::{sanitize_dt, Tween};

/// Advances every channel by the same `dt`.
///
/// The reported overflow is the minimum across channels. While any channel
/// is still running that minimum is 0; once all have finished it is the
/// overflow of the channel that finished last.
#[derive(Default)]
pub struct Parallel {
    channels: Vec<Box<dyn Tween>>,
}

impl Parallel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn add_channel(mut self, node: impl Tween + 'static) -> Self {
        self.push_channel(node);
        self
    }

    pub fn push_channel(&mut self, node: impl Tween + 'static) {
        self.channels.push(Box::new(node));
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channel(&self, index: usize) -> Option<&dyn Tween> {
        self.channels.get(index).map(|c| c.as_ref())
    }
}

impl Tween for Parallel {
    fn advance(&mut self, dt: f32) -> f32 {
        self.channels
            .iter_mut()
            .map(|channel| channel.advance(dt))
            .fold(None, |min: Option<f32>, overflow| {
                Some(min.map_or(overflow, |m| m.min(overflow)))
            })
            .unwrap_or_else(|| sanitize_dt(dt))
    }

    fn is_done(&self) -> bool {
        self.channels.iter().all(|c| c.is_done())
    }

    fn reset(&mut self) {
        for channel in self.channels.iter_mut().rev() {
            channel.reset();
        }
    }

    fn seek_to(&mut self, time: f32) {
        self.reset();
        for channel in &mut self.channels {
            channel.seek_to(time);
        }
    }

    fn skip_to_end(&mut self) {
        for channel in &mut self.channels {
            channel.skip_to_end();
        }
    }

    fn total_duration(&self) -> DurationInfo {
        let mut longest = DurationInfo::known(0.0, 0.0);
        for channel in &self.channels {
            match channel.total_duration() {
                info @ DurationInfo::Known { value, .. } => {
                    if value > longest.value() {
                        longest = info;
                    }
                }
                DurationInfo::Unknown => return DurationInfo::Unknown,
            }
        }
        longest
    }
}

impl fmt::Debug for Parallel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallel")
            .field("channels", &self.channels.len())
            .finish()
    }
}
