//! GameView: maps `core::GameState` into styled terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::items::Item;
use crate::core::GameState;
use crate::input::Cursor;
use crate::term::text::{Line, Rgb, Span, Style};
use crate::types::{AutopilotMode, ItemKind, LevelMode, Phase};

const BORDER: Rgb = Rgb::new(200, 200, 200);
const EMPTY: Rgb = Rgb::new(80, 80, 90);
const CURSOR_MARK: Rgb = Rgb::new(255, 255, 255);
const STATUS: Rgb = Rgb::new(150, 150, 160);

/// Display color per item kind
fn kind_color(kind: ItemKind) -> Rgb {
    match kind {
        ItemKind::Amber => Rgb::new(255, 191, 0),
        ItemKind::Beryl => Rgb::new(130, 220, 160),
        ItemKind::Coral => Rgb::new(255, 127, 110),
        ItemKind::Jade => Rgb::new(0, 168, 107),
        ItemKind::Opal => Rgb::new(168, 195, 220),
        ItemKind::Ruby => Rgb::new(224, 17, 95),
        ItemKind::Topaz => Rgb::new(255, 200, 124),
    }
}

/// Display glyph per item kind (first letter of the kind name)
fn kind_glyph(kind: ItemKind) -> char {
    match kind {
        ItemKind::Amber => 'A',
        ItemKind::Beryl => 'B',
        ItemKind::Coral => 'C',
        ItemKind::Jade => 'J',
        ItemKind::Opal => 'O',
        ItemKind::Ruby => 'R',
        ItemKind::Topaz => 'T',
    }
}

/// A lightweight terminal view for the tray-match game.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render the current game state into terminal lines.
    pub fn render(&self, state: &GameState, cursor: &Cursor) -> Vec<Line> {
        let board = state.board();
        let mut lines: Vec<Line> = Vec::new();

        lines.push(vec![Span::new("tray-match", Style::bold(BORDER))]);
        lines.push(Vec::new());

        // Grid rows, top to bottom.
        let horizontal = format!("+{}+", "-".repeat(board.width() as usize * 3));
        lines.push(vec![Span::new(horizontal.clone(), Style::fg(BORDER))]);
        for y in 0..board.height() {
            let mut line: Line = vec![Span::new("|", Style::fg(BORDER))];
            for x in 0..board.width() {
                let selected = !cursor.in_tray() && cursor.x() == x && cursor.y() == y;
                line.push(Self::cell_span(board.get(x, y).flatten(), selected));
            }
            line.push(Span::new("|", Style::fg(BORDER)));
            lines.push(line);
        }
        lines.push(vec![Span::new(horizontal, Style::fg(BORDER))]);

        // Tray row.
        let mut tray_line: Line = vec![Span::new("tray ", Style::fg(STATUS))];
        for (slot, cell) in board.tray().iter().enumerate() {
            let selected = cursor.in_tray() && cursor.tray_slot() as usize == slot;
            tray_line.push(Self::cell_span(*cell, selected));
        }
        lines.push(tray_line);
        lines.push(Vec::new());

        // Status.
        lines.push(vec![Span::new(
            match state.mode() {
                LevelMode::Moves => format!(
                    "mode moves   spent {}/{}",
                    state.moves_spent(),
                    state.settings().level_moves
                ),
                LevelMode::Timer => format!(
                    "mode timer   left {:>2}s   spent {}",
                    state.time_left_ms() / 1000,
                    state.moves_spent()
                ),
            },
            Style::fg(STATUS),
        )]);
        if state.autopilot() != AutopilotMode::Off {
            lines.push(vec![Span::new(
                format!("autopilot: {}", state.autopilot().as_str()),
                Style::fg(STATUS),
            )]);
        }

        // Outcome / pause overlay line.
        match state.phase() {
            Phase::Won => lines.push(vec![Span::new("YOU WIN", Style::bold(kind_color(ItemKind::Jade)))]),
            Phase::Lost => lines.push(vec![Span::new("YOU LOSE", Style::bold(kind_color(ItemKind::Ruby)))]),
            Phase::Playing if state.paused() => {
                lines.push(vec![Span::new("PAUSED", Style::bold(BORDER))])
            }
            Phase::Playing => {}
        }

        lines.push(Vec::new());
        lines.push(vec![Span::new(
            "arrows/hjkl move - enter select - a autoplay - x autolose - p pause - r restart - q quit",
            Style::dim(STATUS),
        )]);

        lines
    }

    fn cell_span(cell: Option<Item>, selected: bool) -> Span {
        let (open, close) = if selected { ('[', ']') } else { (' ', ' ') };
        match cell {
            Some(item) => {
                let style = if selected {
                    Style::bold(CURSOR_MARK)
                } else {
                    Style::fg(kind_color(item.kind))
                };
                Span::new(format!("{}{}{}", open, kind_glyph(item.kind), close), style)
            }
            None => {
                let style = if selected {
                    Style::bold(CURSOR_MARK)
                } else {
                    Style::dim(EMPTY)
                };
                Span::new(format!("{}.{}", open, close), style)
            }
        }
    }
}
