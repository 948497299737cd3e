use bevy::prelude::*;
use vizij_tween_core::TweenId;

/// Links an entity to a tween player owned by the `TweenRunner`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenHandle(pub TweenId);

/// Inserted on entities whose linked tween has finished.
#[derive(Component, Debug, Default)]
pub struct TweenFinished;
