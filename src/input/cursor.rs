//! Cursor: resolves directional input to a concrete board selection.
//!
//! The cursor walks the grid along its adjacency links and drops into the
//! tray row when moving down past the bottom edge (and back up out of it).
//! This is the terminal stand-in for pointer raycasting: the core only ever
//! sees the resolved `Selection`.

use crate::core::Board;
use crate::types::{Dir, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    y: u8,
    in_tray: bool,
    tray_slot: u8,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            x: 0,
            y: 0,
            in_tray: false,
            tray_slot: 0,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn in_tray(&self) -> bool {
        self.in_tray
    }

    pub fn tray_slot(&self) -> u8 {
        self.tray_slot
    }

    /// The selection currently under the cursor
    pub fn selection(&self) -> Selection {
        if self.in_tray {
            Selection::Tray {
                slot: self.tray_slot,
            }
        } else {
            Selection::Grid {
                x: self.x,
                y: self.y,
            }
        }
    }

    /// Step the cursor; grid movement follows the board's adjacency links,
    /// moving down off the bottom row enters the tray, up leaves it.
    pub fn step(&mut self, board: &Board, dir: Dir) {
        if self.in_tray {
            match dir {
                Dir::Left => {
                    self.tray_slot = self.tray_slot.saturating_sub(1);
                }
                Dir::Right => {
                    if (self.tray_slot as usize) + 1 < board.tray_len() {
                        self.tray_slot += 1;
                    }
                }
                Dir::Up => {
                    self.in_tray = false;
                    self.x = self.x.min(board.width().saturating_sub(1));
                    self.y = board.height().saturating_sub(1);
                }
                Dir::Down => {}
            }
            return;
        }

        match board.neighbour(self.x, self.y, dir) {
            Some((nx, ny)) => {
                self.x = nx;
                self.y = ny;
            }
            None if dir == Dir::Down => {
                // Off the bottom edge: enter the tray row.
                self.in_tray = true;
                self.tray_slot = self
                    .x
                    .min(board.tray_len().saturating_sub(1) as u8);
            }
            None => {}
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
