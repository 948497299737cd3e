use bevy::prelude::*;

use crate::components::{TweenFinished, TweenHandle};
use crate::resources::{FinishedTweens, FixedDt, TweenRunner};

/// Fixed timestep: advance every player by `FixedDt` and record which ones finished.
pub fn tick_tweens_system(
    mut runner: NonSendMut<TweenRunner>,
    dt: Res<FixedDt>,
    mut finished: ResMut<FinishedTweens>,
) {
    finished.0 = runner.tick(dt.0);
}

/// Mark entities whose linked tween finished this tick, and unmark entities
/// whose tween was reset or sought back into a running state.
pub fn mark_finished_system(
    mut commands: Commands,
    runner: NonSend<TweenRunner>,
    finished: Res<FinishedTweens>,
    unmarked: Query<(Entity, &TweenHandle), Without<TweenFinished>>,
    marked: Query<(Entity, &TweenHandle), With<TweenFinished>>,
) {
    for (entity, handle) in marked.iter() {
        // Removed players keep their last marker.
        if runner.get(handle.0).is_some_and(|p| !p.is_finished()) {
            commands.entity(entity).remove::<TweenFinished>();
        }
    }
    if finished.0.is_empty() {
        return;
    }
    for (entity, handle) in unmarked.iter() {
        if finished.0.contains(&handle.0) {
            commands.entity(entity).insert(TweenFinished);
        }
    }
}
