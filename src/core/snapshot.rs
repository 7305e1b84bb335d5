//! Plain-data view of the full game state for rendering and recording.

use crate::types::{AutopilotMode, ItemKind, LevelMode, Phase};

/// Encoding for board and tray cells: 0 = empty, otherwise kind index + 1.
pub fn encode_kind(kind: Option<ItemKind>) -> u8 {
    match kind {
        Some(kind) => kind.index() as u8 + 1,
        None => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major, `encode_kind` per cell
    pub board: Vec<u8>,
    /// `encode_kind` per tray slot
    pub tray: Vec<u8>,
    pub phase: Phase,
    pub mode: LevelMode,
    pub autopilot: AutopilotMode,
    pub paused: bool,
    pub moves_spent: u32,
    pub time_left_ms: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            tray: Vec::new(),
            phase: Phase::Playing,
            mode: LevelMode::Moves,
            autopilot: AutopilotMode::Off,
            paused: false,
            moves_spent: 0,
            time_left_ms: 0,
            episode_id: 0,
            seed: 0,
        }
    }
}
