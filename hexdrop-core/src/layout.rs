//! Layout strings: the `/`-separated text form of a board
//!
//! Characters are read bottom row first, left to right. `' '` skips a cell,
//! `w y g p c` place a color and `/` ends the current row. The gap column of
//! even rows is skipped automatically, so a full even row needs no `/`.
//! Row lengths are not checked: a `/` after a full row skips the next row.

use crate::board::{row_width, CELL_COUNT, HEIGHT, WIDTH};
use crate::colors::Color;
use crate::error::{BoardError, Result};
use crate::hex_board::HexBoard;

/// Row separator
pub const SEPARATOR: char = '/';

/// Write the colors of `text` into `board`, stopping at the first bad
/// character. Does not clear the board first.
pub(crate) fn parse_into(board: &mut HexBoard, text: &str) -> Result<()> {
    let mut index = 0usize;

    for (position, ch) in text.chars().enumerate() {
        let mut row = index / WIDTH;
        if row % 2 == 0 && index % WIDTH == WIDTH - 1 {
            index += 1;
            row += 1;
        }

        if ch == SEPARATOR {
            index = (row + 1) * WIDTH - 1;
        } else {
            let Some(color) = Color::from_char(ch) else {
                tracing::warn!("Invalid character {:?} at position {} in layout", ch, position);
                return Err(BoardError::InvalidCharacter { ch, position });
            };
            if color != Color::Empty {
                if index >= CELL_COUNT {
                    tracing::warn!("Layout runs past the board at index {}", index);
                    return Err(BoardError::LayoutOverflow { index, position });
                }
                board.set_index(index, color);
            }
        }

        index += 1;
    }

    tracing::debug!(
        "Loaded layout {:?}: {} cells occupied",
        text,
        board.occupied().count()
    );
    Ok(())
}

/// Shortest layout string that loads back to `board`
pub(crate) fn export(board: &HexBoard) -> String {
    let rows: Vec<String> = (0..HEIGHT)
        .map(|row| {
            let line: String = (0..row_width(row))
                .map(|column| {
                    board
                        .color_at_index(row * WIDTH + column)
                        .map_or(' ', Color::to_char)
                })
                .collect();
            line.trim_end().to_string()
        })
        .collect();

    let Some(last) = rows.iter().rposition(|line| !line.is_empty()) else {
        return String::new();
    };

    let mut out = String::new();
    for (row, line) in rows.iter().enumerate().take(last + 1) {
        out.push_str(line);
        // A full row already leaves the index at the start of the next one.
        if row < last && line.len() < row_width(row) {
            out.push(SEPARATOR);
        }
    }
    out
}
