//! Input module - key mapping and selection resolution
//!
//! Terminal key events become `InputCommand`s; a `Cursor` walks the board
//! (and the tray row below it) and resolves a confirm into the concrete
//! `Selection` the core consumes.

pub mod cursor;
pub mod map;

pub use cursor::Cursor;
pub use map::{map_key, should_quit, InputCommand};
