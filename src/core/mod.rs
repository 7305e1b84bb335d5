//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board/tray simulation, match rules, and turn
//! sequencing. It has zero dependencies on UI, networking, or I/O.

pub mod board;
pub mod events;
pub mod game_state;
pub mod items;
pub mod rng;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use events::{GameEvent, Location};
pub use game_state::GameState;
pub use items::Item;
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
