//! Styled text primitives for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-span styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bold: false,
            dim: false,
        }
    }
}

impl Style {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(fg: Rgb) -> Self {
        Self {
            fg,
            bold: true,
            dim: false,
        }
    }

    pub const fn dim(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: true,
        }
    }
}

/// A run of identically styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// One terminal row.
pub type Line = Vec<Span>;

/// Concatenate a line's text (used by view tests).
pub fn line_text(line: &Line) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}
