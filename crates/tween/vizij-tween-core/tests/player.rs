use std::cell::RefCell;
use std::rc::Rc;

use vizij_tween_core::{
    builder::{sequence, tween, wait},
    ease, Config, Inputs, PlayerCommand, TweenEvent, TweenPlayer,
};

fn cell(v: f32) -> Rc<RefCell<f32>> {
    Rc::new(RefCell::new(v))
}

fn two_second_player(x: &Rc<RefCell<f32>>, cfg: Config) -> TweenPlayer {
    let root = sequence()
        .add(tween(x.clone(), 10.0, 1.0, ease::linear))
        .add(wait(1.0));
    TweenPlayer::new(root, cfg)
}

#[test]
fn emits_started_then_finished_once() {
    let x = cell(0.0);
    let mut player = two_second_player(&x, Config::default());

    let out = player.advance(0.5);
    assert_eq!(out.events, vec![TweenEvent::Started]);
    assert_eq!(out.time, 0.5);
    assert!(!out.done);

    let out = player.advance(2.0);
    assert_eq!(out.events, vec![TweenEvent::Finished { overflow: 0.5 }]);
    assert!(out.done);
    assert_eq!(out.time, 2.0);
    assert_eq!(*x.borrow(), 10.0);

    let out = player.advance(1.0);
    assert!(out.events.is_empty());
    assert!(out.done);
}

#[test]
fn speed_and_frame_clamp_scale_delta() {
    let x = cell(0.0);
    let cfg = Config {
        speed: 0.5,
        max_frame_dt: Some(0.5),
        autostart: true,
    };
    let mut player = two_second_player(&x, cfg);
    // Raw 4s hitch clamps to 0.5s, then halves to 0.25s.
    player.advance(4.0);
    assert_eq!(player.time(), 0.25);
    assert_eq!(*x.borrow(), 2.5);
}

#[test]
fn pause_holds_and_play_resumes() {
    let x = cell(0.0);
    let mut player = two_second_player(&x, Config::default());
    player.advance(0.25);

    let out = player.update(1.0, Inputs::with(PlayerCommand::Pause));
    assert_eq!(out.events, vec![TweenEvent::Paused]);
    assert_eq!(player.time(), 0.25);
    assert!(!player.is_playing());

    let out = player.update(0.25, Inputs::with(PlayerCommand::Play));
    assert_eq!(out.events, vec![TweenEvent::Resumed]);
    assert_eq!(player.time(), 0.5);
    assert_eq!(*x.borrow(), 5.0);
}

#[test]
fn autostart_off_waits_for_play() {
    let x = cell(0.0);
    let cfg = Config {
        autostart: false,
        ..Config::default()
    };
    let mut player = two_second_player(&x, cfg);
    assert!(player.advance(1.0).events.is_empty());
    assert_eq!(*x.borrow(), 0.0);

    let out = player.update(0.5, Inputs::with(PlayerCommand::Play));
    assert_eq!(out.events, vec![TweenEvent::Started]);
    assert_eq!(*x.borrow(), 5.0);
}

#[test]
fn seek_skip_and_reset_commands() {
    let x = cell(0.0);
    let mut player = two_second_player(&x, Config::default());

    let out = player.update(0.0, Inputs::with(PlayerCommand::Seek { time: 0.5 }));
    assert!(out
        .events
        .contains(&TweenEvent::Seeked { time: 0.5 }));
    assert_eq!(*x.borrow(), 5.0);

    let out = player.update(0.0, Inputs::with(PlayerCommand::SkipToEnd));
    assert!(out.events.contains(&TweenEvent::Skipped));
    assert!(out.finished());
    assert_eq!(player.time(), 2.0);
    assert_eq!(*x.borrow(), 10.0);

    let out = player.update(0.0, Inputs::with(PlayerCommand::Reset));
    assert_eq!(out.events[0], TweenEvent::Reset);
    assert!(!player.is_finished());
    assert_eq!(*x.borrow(), 0.0);
    assert_eq!(player.time(), 0.0);
}

#[test]
fn invalid_speed_command_is_clamped() {
    let x = cell(0.0);
    let mut player = two_second_player(&x, Config::default());
    player.update(1.0, Inputs::with(PlayerCommand::SetSpeed { speed: f32::NAN }));
    assert_eq!(player.speed(), 0.0);
    assert_eq!(player.time(), 0.0);
}

#[test]
fn inputs_deserialize_from_json() {
    let inputs: Inputs = serde_json::from_str(
        r#"{ "commands": ["Pause", { "Seek": { "time": 1.5 } }, { "SetSpeed": { "speed": 2.0 } }] }"#,
    )
    .expect("inputs json");
    assert_eq!(
        inputs.commands,
        vec![
            PlayerCommand::Pause,
            PlayerCommand::Seek { time: 1.5 },
            PlayerCommand::SetSpeed { speed: 2.0 },
        ]
    );
}
