//! Output contracts from the tween player.
//!
//! Cell values are written directly through their handles during stepping,
//! so outputs only carry the player's clock and semantic events.

use serde::{Deserialize, Serialize};

/// Discrete semantic signals emitted during a tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum TweenEvent {
    Started,
    Paused,
    Resumed,
    Seeked { time: f32 },
    Skipped,
    Reset,
    /// Root finished this tick; `overflow` is the unconsumed part of the delta.
    Finished { overflow: f32 },
}

/// Outputs returned by TweenPlayer::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    /// Player time after this tick, in seconds.
    pub time: f32,
    pub done: bool,
    #[serde(default)]
    pub events: Vec<TweenEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: TweenEvent) {
        self.events.push(event);
    }

    pub fn finished(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, TweenEvent::Finished { .. }))
    }
}
