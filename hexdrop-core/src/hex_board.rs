//! Board state: one occupancy bitboard per color

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::board::{Cell, Direction, CELL_COUNT};
use crate::colors::Color;
use crate::error::{BoardError, Result};
use crate::layout;
use crate::render::{self, RenderStyle};

/// Hex puzzle board.
///
/// Each cell's bit is set in at most one color's bitboard; the `Empty` slot
/// is always zero. Serializes as its layout string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexBoard {
    bitboards: [Bitboard; Color::COUNT],
}

impl HexBoard {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a layout string
    pub fn from_layout(text: &str) -> Result<Self> {
        let mut board = Self::new();
        board.load(text)?;
        Ok(board)
    }

    /// Replace the board contents with `text`.
    ///
    /// On error the cells parsed before the offending character stay set.
    pub fn load(&mut self, text: &str) -> Result<()> {
        self.clear();
        layout::parse_into(self, text)
    }

    /// Layout string that loads back to this board
    pub fn to_layout(&self) -> String {
        layout::export(self)
    }

    /// Color of the neighbor of `cell` in `direction`.
    ///
    /// `None` at a board edge or when the neighbor is empty. TopRight on an
    /// even row reports the successor of the color stored at `+WIDTH`
    /// (`White` reads as `Yellow`, `Colored` reads as `None`).
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Color> {
        let color = self.color_at_index(cell.step(direction)?)?;
        if direction == Direction::TopRight && cell.is_even_row() {
            color.successor()
        } else {
            Some(color)
        }
    }

    /// All six neighbors in `Direction::ALL` order
    pub fn neighbors(&self, cell: Cell) -> [Option<Color>; 6] {
        Direction::ALL.map(|direction| self.neighbor(cell, direction))
    }

    pub fn color_at(&self, cell: Cell) -> Option<Color> {
        self.color_at_index(cell.index())
    }

    /// First color whose bitboard has `index` set. Gaps and indices past
    /// the board read as empty.
    pub(crate) fn color_at_index(&self, index: usize) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.bitboards[color.index()].get(index))
    }

    /// Place `color` on `cell`, replacing whatever was there.
    /// `Color::Empty` clears the cell.
    pub fn set(&mut self, cell: Cell, color: Color) {
        self.set_index(cell.index(), color);
    }

    pub(crate) fn set_index(&mut self, index: usize, color: Color) {
        debug_assert!(index < CELL_COUNT);
        for bitboard in self.bitboards.iter_mut() {
            bitboard.clear(index);
        }
        if color != Color::Empty {
            self.bitboards[color.index()].set(index);
        }
    }

    pub fn clear_cell(&mut self, cell: Cell) {
        self.set(cell, Color::Empty);
    }

    pub fn clear(&mut self) {
        self.bitboards = [Bitboard::EMPTY; Color::COUNT];
    }

    /// Occupancy bitboard for `color`
    pub fn bitboard(&self, color: Color) -> Bitboard {
        self.bitboards[color.index()]
    }

    /// Union of all color bitboards
    pub fn occupied(&self) -> Bitboard {
        self.bitboards
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bitboard| acc | bitboard)
    }

    pub fn render(&self, style: RenderStyle) -> String {
        render::render(self, style)
    }

    /// Write the ANSI render to stdout
    pub fn print(&self) {
        print!("{}", self.render(RenderStyle::Ansi));
    }
}

/// Plain-style render
impl fmt::Display for HexBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::Plain))
    }
}

impl TryFrom<String> for HexBoard {
    type Error = BoardError;

    fn try_from(text: String) -> Result<Self> {
        HexBoard::from_layout(&text)
    }
}

impl From<HexBoard> for String {
    fn from(board: HexBoard) -> String {
        board.to_layout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{HEIGHT, LEFT_WALL, RIGHT_WALL, WIDTH};

    fn cell(index: usize) -> Cell {
        Cell::new(index).unwrap()
    }

    /// Every valid cell filled with `color`
    fn filled(color: Color) -> HexBoard {
        let mut board = HexBoard::new();
        for c in Cell::all() {
            board.set(c, color);
        }
        board
    }

    #[test]
    fn test_set_replaces_color() {
        let mut board = HexBoard::new();
        board.set(cell(8), Color::Green);
        board.set(cell(8), Color::White);
        assert_eq!(board.color_at(cell(8)), Some(Color::White));
        assert!(!board.bitboard(Color::Green).get(8));
        assert_eq!(board.occupied().count(), 1);

        board.clear_cell(cell(8));
        assert_eq!(board.color_at(cell(8)), None);
        assert!(board.occupied().is_empty());
    }

    #[test]
    fn test_empty_bitboard_never_set() {
        let mut board = filled(Color::Yellow);
        board.set(cell(3), Color::Empty);
        assert!(board.bitboard(Color::Empty).is_empty());
    }

    #[test]
    fn test_neighbor_reads_color() {
        let mut board = HexBoard::new();
        // row 1, column 3 = 10
        board.set(cell(16), Color::White); // top-left
        board.set(cell(17), Color::Yellow); // top-right
        board.set(cell(11), Color::Green); // right
        board.set(cell(9), Color::Purple); // left
        board.set(cell(3), Color::Colored); // bottom-right
        board.set(cell(2), Color::White); // bottom-left

        assert_eq!(
            board.neighbors(cell(10)),
            [
                Some(Color::White),
                Some(Color::Yellow),
                Some(Color::Green),
                Some(Color::Colored),
                Some(Color::White),
                Some(Color::Purple),
            ]
        );
    }

    #[test]
    fn test_neighbor_empty_is_none() {
        let board = HexBoard::new();
        for c in Cell::all() {
            assert_eq!(board.neighbors(c), [None; 6]);
        }
    }

    #[test]
    fn test_edges_exhaust() {
        let board = filled(Color::Green);
        for c in Cell::all() {
            if c.row() == HEIGHT - 1 {
                assert_eq!(board.neighbor(c, Direction::TopLeft), None);
                assert_eq!(board.neighbor(c, Direction::TopRight), None);
            }
            if c.row() == 0 {
                assert_eq!(board.neighbor(c, Direction::BottomLeft), None);
                assert_eq!(board.neighbor(c, Direction::BottomRight), None);
            }
            if LEFT_WALL.get(c.index()) {
                assert_eq!(board.neighbor(c, Direction::Right), None);
            }
            if RIGHT_WALL.get(c.index()) {
                assert_eq!(board.neighbor(c, Direction::Left), None);
            }
        }
    }

    #[test]
    fn test_top_right_even_row_reports_successor() {
        let mut board = HexBoard::new();
        // row 0, column 2 looks up index 9
        board.set(cell(9), Color::White);
        assert_eq!(board.neighbor(cell(2), Direction::TopRight), Some(Color::Yellow));
        // top-left reads the same cell without the shift
        assert_eq!(board.neighbor(cell(2), Direction::TopLeft), Some(Color::White));

        board.set(cell(9), Color::Purple);
        assert_eq!(board.neighbor(cell(2), Direction::TopRight), Some(Color::Colored));

        // Colored has no successor
        board.set(cell(9), Color::Colored);
        assert_eq!(board.neighbor(cell(2), Direction::TopRight), None);
    }

    #[test]
    fn test_top_right_odd_row_unshifted() {
        let mut board = HexBoard::new();
        board.set(cell(15), Color::White);
        assert_eq!(board.neighbor(cell(8), Direction::TopRight), Some(Color::White));
    }

    #[test]
    fn test_gap_and_past_end_read_empty() {
        let board = filled(Color::Purple);
        // odd row, last column: bottom-right would be the gap below, and is
        // blocked by the edge rule anyway
        assert_eq!(board.neighbor(cell(13), Direction::BottomRight), None);
        // last cell on the board: Right steps onto the top row gap
        assert_eq!(cell(CELL_COUNT - 2).step(Direction::Right), Some(CELL_COUNT - 1));
        assert_eq!(board.neighbor(cell(CELL_COUNT - 2), Direction::Right), None);
        // index 0: Left has nowhere to go
        assert_eq!(board.neighbor(cell(0), Direction::Left), None);
        // odd row column 0: Left lands on the gap of the row below
        assert_eq!(board.neighbor(cell(WIDTH), Direction::Left), None);
    }

    #[test]
    fn test_left_right_symmetry_interior() {
        let mut board = HexBoard::new();
        for (i, c) in Cell::all().enumerate() {
            board.set(c, Color::ALL[1 + i % (Color::COUNT - 1)]);
        }
        for a in Cell::all() {
            if a.column() == 0 || a.column() + 2 >= crate::board::row_width(a.row()) {
                continue;
            }
            let b = cell(a.index() + 1);
            assert_eq!(board.neighbor(a, Direction::Right), board.color_at(b));
            assert_eq!(board.neighbor(b, Direction::Left), board.color_at(a));
        }
    }

    #[test]
    fn test_serde_as_layout() {
        let board = HexBoard::from_layout("yp/wg/p").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, "\"yp/wg/p\"");
        let back: HexBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);

        assert!(serde_json::from_str::<HexBoard>("\"yx\"").is_err());
    }
}
