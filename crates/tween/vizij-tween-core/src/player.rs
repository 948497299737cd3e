//! Player: owns a root tween and drives it from host frame deltas.
//!
//! Methods:
//! - new, update (apply commands → scale/clamp dt → advance root → emit events)

use log::{debug, warn};

use crate::config::Config;
use crate::duration::DurationInfo;
use crate::inputs::{Inputs, PlayerCommand};
use crate::outputs::{Outputs, TweenEvent};
use crate::tween::{sanitize_dt, Tween};

/// Root driver for one tween tree.
pub struct TweenPlayer {
    root: Box<dyn Tween>,
    cfg: Config,
    speed: f32,
    playing: bool,
    started: bool,
    finished: bool,
    /// Player time consumed by the root, in seconds.
    time: f32,
    outputs: Outputs,
}

fn sanitize_speed(speed: f32) -> f32 {
    if speed.is_finite() && speed >= 0.0 {
        speed
    } else {
        warn!("invalid tween speed {speed}; using 0");
        0.0
    }
}

impl TweenPlayer {
    pub fn new(root: impl Tween + 'static, cfg: Config) -> Self {
        Self {
            root: Box::new(root),
            speed: sanitize_speed(cfg.speed),
            playing: cfg.autostart,
            started: false,
            finished: false,
            time: 0.0,
            outputs: Outputs::default(),
            cfg,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn root(&self) -> &dyn Tween {
        self.root.as_ref()
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn total_duration(&self) -> DurationInfo {
        self.root.total_duration()
    }

    /// Step by one host frame with no commands.
    pub fn advance(&mut self, dt: f32) -> &Outputs {
        self.update(dt, Inputs::default())
    }

    /// Apply commands, then step the root by the host frame delta `dt`.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();

        for cmd in inputs.commands {
            self.apply_command(cmd);
        }

        let mut overflow = 0.0;
        if self.playing && !self.finished {
            let dt = self.frame_delta(dt);
            if !self.started {
                self.started = true;
                self.outputs.push_event(TweenEvent::Started);
            }
            overflow = self.root.advance(dt);
            self.time += dt - overflow;
        }

        if self.started && !self.finished && self.root.is_done() {
            self.finished = true;
            debug!("tween player finished at {}s", self.time);
            self.outputs.push_event(TweenEvent::Finished { overflow });
        }

        self.outputs.time = self.time;
        self.outputs.done = self.finished;
        &self.outputs
    }

    fn frame_delta(&self, dt: f32) -> f32 {
        let mut dt = sanitize_dt(dt);
        if let Some(max) = self.cfg.max_frame_dt {
            if dt > max {
                warn!("clamping frame delta {dt}s to {max}s");
                dt = max;
            }
        }
        dt * self.speed
    }

    fn apply_command(&mut self, cmd: PlayerCommand) {
        match cmd {
            PlayerCommand::Play => {
                if !self.playing {
                    self.playing = true;
                    if self.started {
                        self.outputs.push_event(TweenEvent::Resumed);
                    }
                }
            }
            PlayerCommand::Pause => {
                if self.playing {
                    self.playing = false;
                    self.outputs.push_event(TweenEvent::Paused);
                }
            }
            PlayerCommand::SetSpeed { speed } => {
                self.speed = sanitize_speed(speed);
            }
            PlayerCommand::Seek { time } => {
                self.root.seek_to(time);
                self.started = true;
                self.finished = false;
                // Prefer the tree's own clock; it clamps to the real length.
                self.time = self
                    .root
                    .total_duration()
                    .try_elapsed()
                    .unwrap_or(time.max(0.0));
                self.outputs.push_event(TweenEvent::Seeked { time: self.time });
            }
            PlayerCommand::SkipToEnd => {
                self.root.skip_to_end();
                self.started = true;
                if let Ok(total) = self.root.total_duration().try_value() {
                    self.time = total;
                }
                self.outputs.push_event(TweenEvent::Skipped);
            }
            PlayerCommand::Reset => {
                self.root.reset();
                self.started = false;
                self.finished = false;
                self.time = 0.0;
                self.outputs.push_event(TweenEvent::Reset);
            }
        }
    }
}

impl std::fmt::Debug for TweenPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenPlayer")
            .field("cfg", &self.cfg)
            .field("speed", &self.speed)
            .field("playing", &self.playing)
            .field("finished", &self.finished)
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}
