//! Input contracts for the tween player.
//!
//! Adapters (Bevy, tests) build these and pass them into
//! `TweenPlayer::update()` each tick; commands apply before stepping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<PlayerCommand>,
}

impl Inputs {
    pub fn with(command: PlayerCommand) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum PlayerCommand {
    Play,
    Pause,
    SetSpeed { speed: f32 },
    Seek { time: f32 },
    SkipToEnd,
    Reset,
}
