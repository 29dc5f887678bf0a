//! Text rendering of a board, top row first

use crate::board::{row_width, HEIGHT, WIDTH};
use crate::colors::Color;
use crate::hex_board::HexBoard;

/// How cells are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Color escape + `X` for occupied cells
    #[default]
    Ansi,
    /// Layout character for occupied cells, no escapes
    Plain,
}

/// Draw `board` as text. Even rows are indented by one space and are one
/// cell shorter. Every cell is two characters wide; empty cells show `-`.
pub fn render(board: &HexBoard, style: RenderStyle) -> String {
    let mut out = String::new();

    for row in (0..HEIGHT).rev() {
        if row % 2 == 0 {
            out.push(' ');
        }
        for column in 0..row_width(row) {
            let color = board.color_at_index(row * WIDTH + column);
            match (style, color) {
                (RenderStyle::Ansi, Some(color)) => {
                    out.push_str(color.ansi_code());
                    out.push_str("X ");
                }
                (RenderStyle::Ansi, None) => {
                    out.push_str(Color::Empty.ansi_code());
                    out.push_str("- ");
                }
                (RenderStyle::Plain, Some(color)) => {
                    out.push(color.to_char());
                    out.push(' ');
                }
                (RenderStyle::Plain, None) => out.push_str("- "),
            }
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_shape() {
        let board = HexBoard::from_layout("yp/wg/p").unwrap();
        let text = render(&board, RenderStyle::Plain);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), HEIGHT);

        // top row (10) is even: indented, six cells
        assert_eq!(lines[0], " - - - - - - ");
        // row 9 is odd: seven cells
        assert_eq!(lines[1], "- - - - - - - ");
        assert_eq!(lines[HEIGHT - 3], " p - - - - - ");
        assert_eq!(lines[HEIGHT - 2], "w g - - - - - ");
        assert_eq!(lines[HEIGHT - 1], " y p - - - - ");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_ansi_uses_escapes() {
        let board = HexBoard::from_layout("c").unwrap();
        let text = render(&board, RenderStyle::Ansi);
        let bottom = text.lines().last().unwrap();
        assert!(bottom.starts_with(&format!(" {}X ", Color::Colored.ansi_code())));
        assert!(bottom.ends_with(&format!("{}- ", Color::Empty.ansi_code())));
        assert_eq!(text.matches("X ").count(), 1);
        assert_eq!(text.matches("- ").count(), 70);
    }

    #[test]
    fn test_display_is_plain() {
        let board = HexBoard::from_layout("g").unwrap();
        assert_eq!(board.to_string(), render(&board, RenderStyle::Plain));
    }
}
