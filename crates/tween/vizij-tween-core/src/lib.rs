//! Vizij Tween Core (engine-agnostic)
//!
//! A small synchronous interpreter for nested tween trees. The host owns a
//! root node (usually a [`Sequence`] or [`Parallel`]) and calls
//! [`Tween::advance`] once per frame with the frame delta. Leaves write their
//! interpolated values straight into host-owned [`Tweenable`] cells; time a
//! node does not consume is returned as overflow so siblings can use it in
//! the same call.
//!
//! [`TweenPlayer`] wraps a root with speed, frame-delta clamping, playback
//! commands and per-tick events, for adapters that want more than a bare
//! `advance` loop.

pub mod builder;
pub mod cell;
pub mod config;
pub mod duration;
pub mod dynamic;
pub mod ease;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod interp;
pub mod leaf;
pub mod outputs;
pub mod parallel;
pub mod player;
pub mod sequence;
pub mod tween;
pub mod value;
pub mod wait;

// Re-exports for consumers (adapters)
pub use builder::{callback, dynamic, parallel, sequence, tween, wait};
pub use cell::{Accessor, Tweenable};
pub use config::Config;
pub use duration::DurationInfo;
pub use dynamic::Dynamic;
pub use error::TweenError;
pub use ids::{IdAllocator, TweenId};
pub use inputs::{Inputs, PlayerCommand};
pub use interp::Lerp;
pub use leaf::Leaf;
pub use outputs::{Outputs, TweenEvent};
pub use parallel::Parallel;
pub use player::TweenPlayer;
pub use sequence::Sequence;
pub use tween::Tween;
pub use value::{Value, ValueKind};
pub use wait::{Callback, Wait};
