//! Terminal tray-match runner (default binary).
//!
//! Moves items from the grid into the tray with the keyboard; three of a
//! kind in the tray clear. `--record` appends JSON-line observations for
//! external tooling.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_traymatch::core::GameState;
use tui_traymatch::input::{map_key, should_quit, Cursor, InputCommand};
use tui_traymatch::observe::Recorder;
use tui_traymatch::term::{GameView, TerminalRenderer};
use tui_traymatch::types::{AutopilotMode, GameAction, GameSettings, LevelMode, TICK_MS};

struct RunConfig {
    mode: LevelMode,
    seed: u32,
    record: Option<String>,
    autopilot: AutopilotMode,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig {
        mode: LevelMode::Moves,
        seed: 1,
        record: None,
        autopilot: AutopilotMode::Off,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                config.mode =
                    LevelMode::from_str(v).ok_or_else(|| anyhow!("invalid --mode value: {}", v))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--record" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --record"))?;
                config.record = Some(v.clone());
            }
            "--autopilot" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --autopilot"))?;
                config.autopilot = match v.to_lowercase().as_str() {
                    "win" => AutopilotMode::Win,
                    "lose" => AutopilotMode::Lose,
                    _ => return Err(anyhow!("invalid --autopilot value: {}", v)),
                };
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut recorder = match &config.record {
        Some(path) => Some(Recorder::new(BufWriter::new(File::create(path)?))),
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, recorder.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<W: Write>(
    term: &mut TerminalRenderer,
    config: &RunConfig,
    mut recorder: Option<&mut Recorder<W>>,
) -> Result<()> {
    let mut state = GameState::new(GameSettings::default(), config.mode, config.seed);
    state.start();
    if config.autopilot != AutopilotMode::Off {
        state.apply_action(GameAction::Autopilot(config.autopilot));
    }

    let view = GameView::new();
    let mut cursor = Cursor::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        term.draw(&view.render(&state, &cursor))?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(command) = map_key(key) {
                        match command {
                            InputCommand::Move(dir) => cursor.step(state.board(), dir),
                            InputCommand::Confirm => {
                                state.apply_action(GameAction::Select(cursor.selection()));
                            }
                            InputCommand::Pause => {
                                state.apply_action(GameAction::Pause);
                            }
                            InputCommand::Restart => {
                                state.apply_action(GameAction::Restart);
                            }
                            InputCommand::AutoWin => {
                                toggle_autopilot(&mut state, AutopilotMode::Win)
                            }
                            InputCommand::AutoLose => {
                                toggle_autopilot(&mut state, AutopilotMode::Lose)
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.tick(TICK_MS);
        }

        // Events drive the recorder; rendering re-reads state every frame.
        let events = state.drain_events();
        if !events.is_empty() {
            if let Some(rec) = recorder.as_deref_mut() {
                rec.record(&state.snapshot())?;
            }
        }
    }
}

fn toggle_autopilot(state: &mut GameState, mode: AutopilotMode) {
    let next = if state.autopilot() == mode {
        AutopilotMode::Off
    } else {
        mode
    };
    state.apply_action(GameAction::Autopilot(next));
}
