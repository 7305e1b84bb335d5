//! Game state module - turn sequencing and terminal-state detection
//!
//! Ties the board, RNG, and event queue together. Consumes resolved
//! selections (or automated policy steps), drives match resolution, and
//! latches the terminal outcome. The host loop calls `tick` at a fixed
//! cadence and drains events after every call.

use crate::core::events::{GameEvent, Location};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{encode_kind, GameSnapshot};
use crate::core::Board;
use crate::types::{
    AutopilotMode, GameAction, GameSettings, LevelMode, Phase, Selection, AUTOPILOT_STEP_MS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SimpleRng,
    settings: GameSettings,
    mode: LevelMode,
    autopilot: AutopilotMode,
    autopilot_timer_ms: u32,
    phase: Phase,
    paused: bool,
    started: bool,
    /// Committed placements this session (display only; the move budget has
    /// no terminal effect)
    moves_spent: u32,
    time_left_ms: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    seed: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given settings, mode, and RNG seed
    pub fn new(settings: GameSettings, mode: LevelMode, seed: u32) -> Self {
        Self {
            board: Board::new(&settings),
            rng: SimpleRng::new(seed),
            settings,
            mode,
            autopilot: AutopilotMode::Off,
            autopilot_timer_ms: 0,
            phase: Phase::Playing,
            paused: false,
            started: false,
            moves_spent: 0,
            time_left_ms: settings.level_time_ms,
            episode_id: 0,
            seed,
            events: Vec::new(),
        }
    }

    /// Start the game and fill the board
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.board.fill(&mut self.rng);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase != Phase::Playing
    }

    pub fn mode(&self) -> LevelMode {
        self.mode
    }

    pub fn autopilot(&self) -> AutopilotMode {
        self.autopilot
    }

    pub fn moves_spent(&self) -> u32 {
        self.moves_spent
    }

    pub fn time_left_ms(&self) -> u32 {
        self.time_left_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// True iff every grid cell is empty
    pub fn is_board_cleared(&self) -> bool {
        self.board.is_cleared()
    }

    /// Take all pending events (consumed by the host once per frame)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(selection) => self.select(selection),
            GameAction::Pause => {
                if self.game_over() || !self.started {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                let seed = self.rng.state();
                let next_episode = self.episode_id.wrapping_add(1);
                *self = Self::new(self.settings, self.mode, seed);
                self.episode_id = next_episode;
                self.start();
                true
            }
            GameAction::Autopilot(mode) => {
                if self.game_over() {
                    return false;
                }
                self.autopilot = mode;
                self.autopilot_timer_ms = 0;
                true
            }
        }
    }

    /// Handle a resolved player selection.
    ///
    /// A tray slot retracts the item to its origin (timer mode only). A grid
    /// cell places the item into the tray and resolves matches and terminal
    /// conditions. Returns false when the selection was a no-op.
    pub fn select(&mut self, selection: Selection) -> bool {
        if self.game_over() || self.paused || !self.started {
            return false;
        }

        match selection {
            Selection::Tray { slot } => {
                if self.mode != LevelMode::Timer {
                    return false;
                }
                self.retract(slot as usize)
            }
            Selection::Grid { x, y } => {
                if !self.place_from_grid(x, y) {
                    return false;
                }
                self.resolve_after_placement();
                true
            }
        }
    }

    /// Autoplay step: place the first item that keeps the game progressing.
    ///
    /// Scans the grid row-major. The first move of a round goes straight to
    /// the empty tray without match evaluation; afterwards only items whose
    /// kind already has a tray representative are placed, followed by match
    /// and terminal resolution. Returns false when nothing was placed.
    pub fn make_best_move(&mut self) -> bool {
        if self.game_over() || self.paused || !self.started {
            return false;
        }

        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                let Some(Some(item)) = self.board.get(x, y) else {
                    continue;
                };

                if self.board.is_tray_empty() {
                    return self.place_from_grid(x, y);
                }

                if self.board.tray_has_kind(item.kind) {
                    if !self.place_from_grid(x, y) {
                        return false;
                    }
                    self.resolve_after_placement();
                    return true;
                }
            }
        }
        false
    }

    /// Counter-policy: place the first item whose kind is not yet in the
    /// tray, skipping match and terminal evaluation. Returns false when
    /// every occupied cell duplicates a tray kind or the placement fails.
    pub fn make_losing_move(&mut self) -> bool {
        if self.game_over() || self.paused || !self.started {
            return false;
        }

        for y in 0..self.board.height() {
            for x in 0..self.board.width() {
                let Some(Some(item)) = self.board.get(x, y) else {
                    continue;
                };
                if !self.board.tray_has_kind(item.kind) {
                    return self.place_from_grid(x, y);
                }
            }
        }
        false
    }

    /// Advance timers; runs the autopilot and the timer-mode countdown
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over() || !self.started {
            return;
        }

        if self.mode == LevelMode::Timer {
            self.time_left_ms = self.time_left_ms.saturating_sub(elapsed_ms);
            if self.time_left_ms == 0 {
                self.finish(Phase::Lost);
                return;
            }
        }

        if self.autopilot != AutopilotMode::Off {
            self.autopilot_timer_ms += elapsed_ms;
            if self.autopilot_timer_ms >= AUTOPILOT_STEP_MS {
                self.autopilot_timer_ms = 0;
                match self.autopilot {
                    AutopilotMode::Win => {
                        self.make_best_move();
                    }
                    AutopilotMode::Lose => {
                        self.make_losing_move();
                    }
                    AutopilotMode::Off => {}
                }
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();

        out.board.clear();
        out.board
            .extend(self.board.cells().iter().map(|c| encode_kind(c.map(|i| i.kind))));

        out.tray.clear();
        out.tray
            .extend(self.board.tray().iter().map(|c| encode_kind(c.map(|i| i.kind))));

        out.phase = self.phase;
        out.mode = self.mode;
        out.autopilot = self.autopilot;
        out.paused = self.paused;
        out.moves_spent = self.moves_spent;
        out.time_left_ms = self.time_left_ms;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Move a grid item into the tray, emitting placement events
    fn place_from_grid(&mut self, x: u8, y: u8) -> bool {
        let Some(Some(item)) = self.board.get(x, y) else {
            return false;
        };
        let Some(slot) = self.board.move_to_tray(x, y) else {
            return false;
        };

        self.moves_spent += 1;
        self.events.push(GameEvent::ItemMoved {
            item,
            to: Location::Tray { slot: slot as u8 },
        });
        self.events.push(GameEvent::MoveCommitted {
            moves_spent: self.moves_spent,
        });
        true
    }

    /// Retract a trayed item to its recorded origin
    fn retract(&mut self, slot: usize) -> bool {
        let Some(item) = self.board.tray_item(slot) else {
            return false;
        };
        let Some((x, y)) = self.board.origin_of(&item) else {
            return false;
        };

        if !self.board.move_from_tray_to_origin(slot) {
            return false;
        }
        self.events.push(GameEvent::ItemMoved {
            item,
            to: Location::Grid { x, y },
        });
        true
    }

    /// Clear matched tray slots, then evaluate terminal conditions in order:
    /// tray full loses (exempt in timer mode), then a cleared grid wins.
    fn resolve_after_placement(&mut self) {
        let matches = self.board.find_tray_matches();
        for &slot in &matches {
            if let Some(item) = self.board.take_tray(slot) {
                self.events.push(GameEvent::ItemExploded {
                    item,
                    slot: slot as u8,
                });
            }
        }

        if self.board.is_tray_full() {
            if self.mode != LevelMode::Timer {
                self.finish(Phase::Lost);
            }
        } else if self.board.is_cleared() {
            self.finish(Phase::Won);
        }
    }

    /// Latch a terminal phase; signals are emitted exactly once per session
    fn finish(&mut self, phase: Phase) {
        if self.game_over() {
            return;
        }
        self.phase = phase;
        self.events.push(GameEvent::PhaseChanged { phase });
        self.events.push(match phase {
            Phase::Won => GameEvent::Won,
            _ => GameEvent::Lost,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSettings::default(), LevelMode::Moves, 1)
    }
}
