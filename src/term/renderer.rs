//! TerminalRenderer: flushes view lines to a real terminal.
//!
//! Raw mode + alternate screen, full redraw per frame. The board is a
//! handful of rows, so diffing buys nothing here.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::text::{Line, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw the full frame, one view line per terminal row.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current: Option<Style> = None;
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            for span in line {
                if current != Some(span.style) {
                    self.apply_style(span.style)?;
                    current = Some(span.style);
                }
                self.stdout.queue(Print(span.text.as_str()))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(1, 2, 3);
        assert_eq!(rgb_to_color(rgb), Color::Rgb { r: 1, g: 2, b: 3 });
    }
}
