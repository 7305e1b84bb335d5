//! Observation recording: JSON-line snapshots for external tooling.
//!
//! One `ObservationMessage` per line, written after every frame that
//! produced events. Enums are string-encoded so consumers do not need the
//! crate's type definitions.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::core::snapshot::GameSnapshot;

/// Protocol version for the observation line format
pub const OBSERVE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct ObservationMessage {
    pub v: u32,
    pub episode_id: u32,
    pub seed: u32,
    pub width: u8,
    pub height: u8,
    /// Row-major cells; 0 = empty, otherwise kind index + 1
    pub board: Vec<u8>,
    pub tray: Vec<u8>,
    pub phase: &'static str,
    pub mode: &'static str,
    pub autopilot: &'static str,
    pub paused: bool,
    pub playable: bool,
    pub moves_spent: u32,
    pub time_left_ms: u32,
}

impl ObservationMessage {
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            v: OBSERVE_VERSION,
            episode_id: snapshot.episode_id,
            seed: snapshot.seed,
            width: snapshot.width,
            height: snapshot.height,
            board: snapshot.board.clone(),
            tray: snapshot.tray.clone(),
            phase: snapshot.phase.as_str(),
            mode: snapshot.mode.as_str(),
            autopilot: snapshot.autopilot.as_str(),
            paused: snapshot.paused,
            playable: snapshot.playable(),
            moves_spent: snapshot.moves_spent,
            time_left_ms: snapshot.time_left_ms,
        }
    }
}

/// Writes observation lines to any sink (file, stdout, buffer)
pub struct Recorder<W: Write> {
    out: W,
}

impl<W: Write> Recorder<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Serialize and append one observation line
    pub fn record(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let message = ObservationMessage::from_snapshot(snapshot);
        let line = serde_json::to_string(&message)?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn test_record_writes_one_line_per_snapshot() {
        let mut state = GameState::default();
        state.start();

        let mut recorder = Recorder::new(Vec::new());
        recorder.record(&state.snapshot()).unwrap();
        recorder.record(&state.snapshot()).unwrap();

        let out = String::from_utf8(recorder.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
    }
}
