use bevy::prelude::*;
use hashbrown::HashMap;
use log::debug;
use vizij_tween_core::{
    Config, IdAllocator, Inputs, PlayerCommand, Tween, TweenId, TweenPlayer,
};

/// Owns every tween player driven by the plugin.
///
/// Tween trees hold `Rc` cell handles and boxed closures, so the runner is a
/// non-send resource: access it with `NonSend`/`NonSendMut`.
#[derive(Default, Debug)]
pub struct TweenRunner {
    ids: IdAllocator,
    players: HashMap<TweenId, TweenPlayer>,
    pending: HashMap<TweenId, Inputs>,
}

impl TweenRunner {
    pub fn spawn(&mut self, root: impl Tween + 'static) -> TweenId {
        self.spawn_with(root, Config::default())
    }

    pub fn spawn_with(&mut self, root: impl Tween + 'static, cfg: Config) -> TweenId {
        let id = self.ids.alloc_tween();
        self.players.insert(id, TweenPlayer::new(root, cfg));
        id
    }

    /// Queue a command for the player's next tick. Unknown ids are ignored.
    pub fn command(&mut self, id: TweenId, cmd: PlayerCommand) {
        if self.players.contains_key(&id) {
            self.pending.entry(id).or_default().commands.push(cmd);
        }
    }

    pub fn get(&self, id: TweenId) -> Option<&TweenPlayer> {
        self.players.get(&id)
    }

    pub fn remove(&mut self, id: TweenId) -> Option<TweenPlayer> {
        self.pending.remove(&id);
        self.players.remove(&id)
    }

    pub fn is_finished(&self, id: TweenId) -> bool {
        self.players.get(&id).is_some_and(|p| p.is_finished())
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Step every player by `dt`, returning the ids that finished this tick.
    pub fn tick(&mut self, dt: f32) -> Vec<TweenId> {
        let mut finished = Vec::new();
        for (id, player) in self.players.iter_mut() {
            let inputs = self.pending.remove(id).unwrap_or_default();
            if player.update(dt, inputs).finished() {
                debug!("tween {id:?} finished");
                finished.push(*id);
            }
        }
        finished
    }
}

/// Players that finished during the most recent fixed tick.
#[derive(Resource, Default, Debug)]
pub struct FinishedTweens(pub Vec<TweenId>);

/// Fixed timestep configuration (seconds per tick).
#[derive(Resource)]
pub struct FixedDt(pub f32);

impl Default for FixedDt {
    fn default() -> Self {
        Self(1.0 / 60.0)
    }
}
