//! Tray-match puzzle: grid/tray matching core with a terminal frontend.
//!
//! The `core` module holds the simulation (board, tray, matching, turn
//! logic); `term` renders it, `input` resolves keys to selections, and
//! `observe` records JSON-line observations for external tooling.

pub mod core;
pub mod input;
pub mod observe;
pub mod term;
pub mod types;
