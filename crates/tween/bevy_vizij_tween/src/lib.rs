//! Bevy host driver for Vizij tween trees.
//!
//! The plugin owns a non-send [`TweenRunner`] and advances every player once
//! per `FixedUpdate` tick by [`FixedDt`].

pub mod components;
pub mod resources;
pub mod systems;

use bevy::prelude::*;

pub use components::{TweenFinished, TweenHandle};
pub use resources::{FinishedTweens, FixedDt, TweenRunner};

pub struct VizijTweenPlugin;

impl Plugin for VizijTweenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_non_send_resource(TweenRunner::default())
            .init_resource::<FixedDt>()
            .init_resource::<FinishedTweens>()
            .add_systems(
                FixedUpdate,
                (systems::tick_tweens_system, systems::mark_finished_system).chain(),
            );
    }
}
