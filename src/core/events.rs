//! Game events - the fire-and-forget boundary to presentation.
//!
//! The core pushes events into a queue and never waits on a consumer; the
//! host drains the queue once per frame and reacts (animation, recording,
//! outcome screens). `Won` and `Lost` are emitted at most once per session.

use crate::core::items::Item;
use crate::types::Phase;

/// Where an item's visual representation should end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Grid { x: u8, y: u8 },
    Tray { slot: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An item relocated; presentation moves its visual to `to`
    ItemMoved { item: Item, to: Location },
    /// A matched item left play from this tray slot
    ItemExploded { item: Item, slot: u8 },
    /// A placement was committed (player or autopilot)
    MoveCommitted { moves_spent: u32 },
    /// The session phase changed (pause is not a phase change)
    PhaseChanged { phase: Phase },
    /// Terminal outcome signals; at most one of these per session
    Won,
    Lost,
}
