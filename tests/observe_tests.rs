//! Observation line format gate - external consumers parse these fields

use serde_json::Value;

use tui_traymatch::core::GameState;
use tui_traymatch::observe::{Recorder, OBSERVE_VERSION};
use tui_traymatch::types::{GameSettings, LevelMode, Selection};

fn record_once(state: &GameState) -> Value {
    let mut recorder = Recorder::new(Vec::new());
    recorder.record(&state.snapshot()).unwrap();
    let out = String::from_utf8(recorder.into_inner()).unwrap();
    serde_json::from_str(out.lines().next().unwrap()).unwrap()
}

#[test]
fn test_observation_schema() {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 42);
    state.start();

    let value = record_once(&state);
    assert_eq!(value["v"], OBSERVE_VERSION);
    assert_eq!(value["width"], 4);
    assert_eq!(value["height"], 6);
    assert_eq!(value["board"].as_array().unwrap().len(), 24);
    assert_eq!(value["tray"].as_array().unwrap().len(), 5);
    assert_eq!(value["phase"], "playing");
    assert_eq!(value["mode"], "moves");
    assert_eq!(value["autopilot"], "off");
    assert_eq!(value["paused"], false);
    assert_eq!(value["playable"], true);
    assert_eq!(value["moves_spent"], 0);
    assert_eq!(value["seed"], 42);
}

#[test]
fn test_observation_cell_encoding() {
    let mut state = GameState::new(GameSettings::default(), LevelMode::Moves, 42);
    state.start();

    let before = record_once(&state);
    // A freshly filled board has no empty cells and an empty tray.
    assert!(before["board"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| (1..=7).contains(&c.as_u64().unwrap())));
    assert!(before["tray"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c.as_u64().unwrap() == 0));

    state.select(Selection::Grid { x: 0, y: 0 });
    let after = record_once(&state);
    assert_eq!(after["board"].as_array().unwrap()[0], 0);
    assert_ne!(after["tray"].as_array().unwrap()[0], 0);
    assert_eq!(after["moves_spent"], 1);
}

#[test]
fn test_observation_timer_mode_fields() {
    let mut state = GameState::new(
        GameSettings {
            level_time_ms: 5_000,
            ..GameSettings::default()
        },
        LevelMode::Timer,
        7,
    );
    state.start();
    state.tick(1_000);

    let value = record_once(&state);
    assert_eq!(value["mode"], "timer");
    assert_eq!(value["time_left_ms"], 4_000);
}
