//! Color definitions

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};

/// Bubble color. `Empty` is a placeholder slot in the color table and is
/// never stored on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Empty = 0,
    White = 1,
    Yellow = 2,
    Green = 3,
    Purple = 4,
    Colored = 5,
}

impl Color {
    /// Number of entries in the color table, `Empty` included
    pub const COUNT: usize = 6;

    pub const ALL: [Color; Color::COUNT] = [
        Color::Empty,
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Colored,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(BoardError::UnknownColorIndex(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Layout character for this color (`' '` for `Empty`)
    pub fn to_char(self) -> char {
        match self {
            Color::Empty => ' ',
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Purple => 'p',
            Color::Colored => 'c',
        }
    }

    /// Parse a layout character. `'/'` is a separator, not a color.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Color::Empty),
            'w' => Some(Color::White),
            'y' => Some(Color::Yellow),
            'g' => Some(Color::Green),
            'p' => Some(Color::Purple),
            'c' => Some(Color::Colored),
            _ => None,
        }
    }

    /// Next color in table order, `None` after `Colored`
    pub fn successor(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// 24-bit foreground escape used by the ANSI render
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Empty => "\u{1b}[0m",
            Color::White => "\u{1b}[38;2;255;255;255m",
            Color::Yellow => "\u{1b}[38;2;255;196;96m",
            Color::Green => "\u{1b}[38;2;96;255;96m",
            Color::Purple => "\u{1b}[38;2;255;96;196m",
            Color::Colored => "\u{1b}[38;2;0;255;255m",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Empty => "EMPTY",
            Color::White => "WHITE",
            Color::Yellow => "YELLOW",
            Color::Green => "GREEN",
            Color::Purple => "PURPLE",
            Color::Colored => "COLORED",
        };
        write!(f, "{}", name)
    }
}
