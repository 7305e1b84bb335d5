//! Terminal module - pure view plus a crossterm-backed renderer

pub mod game_view;
pub mod renderer;
pub mod text;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use text::{Line, Rgb, Span, Style};
