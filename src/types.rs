//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (columns x rows)
pub const BOARD_SIZE_X: u8 = 4;
pub const BOARD_SIZE_Y: u8 = 6;

/// Default number of tray slots
pub const TRAY_CELLS: u8 = 5;

/// Hard upper bound on tray slots (fixed-capacity storage)
pub const TRAY_CELLS_MAX: usize = 8;

/// Default minimum group size for a match
pub const MATCHES_MIN: u8 = 3;

/// Default move budget shown in the moves mode
pub const LEVEL_MOVES: u32 = 16;

/// Default time budget for the timer mode (milliseconds)
pub const LEVEL_TIME_MS: u32 = 60_000;

/// Host tick granularity (milliseconds)
pub const TICK_MS: u32 = 16;

/// Delay between automated placements while an autopilot runs (milliseconds)
pub const AUTOPILOT_STEP_MS: u32 = 250;

/// Item kinds - the one active "normal" family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Amber,
    Beryl,
    Coral,
    Jade,
    Opal,
    Ruby,
    Topaz,
}

impl ItemKind {
    /// Number of active kinds
    pub const COUNT: usize = 7;

    /// All kinds in enumeration order
    pub const ALL: [ItemKind; Self::COUNT] = [
        ItemKind::Amber,
        ItemKind::Beryl,
        ItemKind::Coral,
        ItemKind::Jade,
        ItemKind::Opal,
        ItemKind::Ruby,
        ItemKind::Topaz,
    ];

    /// Position in the enumeration (stable; used by snapshots)
    pub fn index(self) -> usize {
        match self {
            ItemKind::Amber => 0,
            ItemKind::Beryl => 1,
            ItemKind::Coral => 2,
            ItemKind::Jade => 3,
            ItemKind::Opal => 4,
            ItemKind::Ruby => 5,
            ItemKind::Topaz => 6,
        }
    }

    /// Parse kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "amber" => Some(ItemKind::Amber),
            "beryl" => Some(ItemKind::Beryl),
            "coral" => Some(ItemKind::Coral),
            "jade" => Some(ItemKind::Jade),
            "opal" => Some(ItemKind::Opal),
            "ruby" => Some(ItemKind::Ruby),
            "topaz" => Some(ItemKind::Topaz),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Amber => "amber",
            ItemKind::Beryl => "beryl",
            ItemKind::Coral => "coral",
            ItemKind::Jade => "jade",
            ItemKind::Opal => "opal",
            ItemKind::Ruby => "ruby",
            ItemKind::Topaz => "topaz",
        }
    }
}

/// Grid adjacency directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// A resolved cell selection: either a grid cell or a tray slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Grid { x: u8, y: u8 },
    Tray { slot: u8 },
}

/// Automated play modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutopilotMode {
    Off,
    Win,
    Lose,
}

impl AutopilotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutopilotMode::Off => "off",
            AutopilotMode::Win => "win",
            AutopilotMode::Lose => "lose",
        }
    }
}

/// Level modes selectable at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelMode {
    /// Tracks a move budget; tray overflow loses
    Moves,
    /// Counts a time budget down; allows retracting tray items and
    /// exempts a full tray from losing
    Timer,
}

impl LevelMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moves" => Some(LevelMode::Moves),
            "timer" => Some(LevelMode::Timer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LevelMode::Moves => "moves",
            LevelMode::Timer => "timer",
        }
    }
}

/// Session phase; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Lost => "lost",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Select(Selection),
    Pause,
    Restart,
    Autopilot(AutopilotMode),
}

/// Configuration constants, read once at setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub board_size_x: u8,
    pub board_size_y: u8,
    /// Clamped to `TRAY_CELLS_MAX` at board construction
    pub tray_cells: u8,
    pub matches_min: u8,
    pub level_moves: u32,
    pub level_time_ms: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size_x: BOARD_SIZE_X,
            board_size_y: BOARD_SIZE_Y,
            tray_cells: TRAY_CELLS,
            matches_min: MATCHES_MIN,
            level_moves: LEVEL_MOVES,
            level_time_ms: LEVEL_TIME_MS,
        }
    }
}
