//! Duration descriptors reported by tween nodes.

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Statically known total duration (with the node's current elapsed time),
/// or explicitly unknown (e.g. a dynamic subtree that has not been built yet).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DurationInfo {
    Known { value: f32, elapsed: f32 },
    Unknown,
}

impl DurationInfo {
    #[inline]
    pub fn known(value: f32, elapsed: f32) -> Self {
        DurationInfo::Known { value, elapsed }
    }

    #[inline]
    pub fn is_known(&self) -> bool {
        matches!(self, DurationInfo::Known { .. })
    }

    /// Total duration in seconds.
    ///
    /// # Panics
    /// Panics on `Unknown`. Use [`DurationInfo::try_value`] when the tree may
    /// contain unmaterialized dynamic nodes.
    #[track_caller]
    pub fn value(&self) -> f32 {
        match self.try_value() {
            Ok(v) => v,
            Err(e) => panic!("DurationInfo::value: {e}"),
        }
    }

    /// Elapsed time in seconds.
    ///
    /// # Panics
    /// Panics on `Unknown`.
    #[track_caller]
    pub fn elapsed(&self) -> f32 {
        match self.try_elapsed() {
            Ok(v) => v,
            Err(e) => panic!("DurationInfo::elapsed: {e}"),
        }
    }

    pub fn try_value(&self) -> Result<f32, TweenError> {
        match *self {
            DurationInfo::Known { value, .. } => Ok(value),
            DurationInfo::Unknown => Err(TweenError::UnknownDuration),
        }
    }

    pub fn try_elapsed(&self) -> Result<f32, TweenError> {
        match *self {
            DurationInfo::Known { elapsed, .. } => Ok(elapsed),
            DurationInfo::Unknown => Err(TweenError::UnknownDuration),
        }
    }

    /// Remaining time, or `None` when unknown.
    pub fn remaining(&self) -> Option<f32> {
        match *self {
            DurationInfo::Known { value, elapsed } => Some((value - elapsed).max(0.0)),
            DurationInfo::Unknown => None,
        }
    }
}
