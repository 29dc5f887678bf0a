//! Hex board geometry with a staggered, linear cell index
//!
//! Rows are numbered from the bottom. Even rows are indented by half a cell
//! and hold `WIDTH - 1` cells; their last column is a structural gap that
//! keeps `index / WIDTH` and `index % WIDTH` uniform across rows.
//!
//! ```text
//! row 10   x x x x x x -
//! row  9  x x x x x x x
//!   ...
//! row  1  x x x x x x x
//! row  0   x x x x x x -
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bitboard::Bitboard;
use crate::error::{BoardError, Result};

/// Board width (cells in an odd row)
pub const WIDTH: usize = 7;

/// Board height in rows
pub const HEIGHT: usize = 11;

/// Size of the linear index space, gaps included
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

/// First cell of every row
pub const LEFT_WALL: Bitboard = left_wall();

/// Last valid cell of every row
pub const RIGHT_WALL: Bitboard = right_wall();

const fn left_wall() -> Bitboard {
    let mut wall = Bitboard::EMPTY;
    let mut row = 0;
    while row < HEIGHT {
        wall = wall.with(row * WIDTH);
        row += 1;
    }
    wall
}

const fn right_wall() -> Bitboard {
    let mut wall = Bitboard::EMPTY;
    let mut row = 0;
    while row < HEIGHT {
        wall = wall.with(row * WIDTH + row_width(row) - 1);
        row += 1;
    }
    wall
}

/// Number of valid cells in `row`
pub const fn row_width(row: usize) -> usize {
    if row % 2 == 0 {
        WIDTH - 1
    } else {
        WIDTH
    }
}

/// True for the last column of an even row
pub const fn is_gap(index: usize) -> bool {
    (index / WIDTH) % 2 == 0 && index % WIDTH == WIDTH - 1
}

/// A valid (non-gap, on-board) cell index
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(u8);

impl Cell {
    pub fn new(index: usize) -> Result<Self> {
        if index >= CELL_COUNT || is_gap(index) {
            return Err(BoardError::OutOfRangeIndex(index));
        }
        Ok(Cell(index as u8))
    }

    /// Cell at `row`, `column` (both counted from zero, row 0 at the bottom)
    pub fn at(row: usize, column: usize) -> Result<Self> {
        if row >= HEIGHT || column >= row_width(row) {
            return Err(BoardError::OutOfRangeIndex(row * WIDTH + column));
        }
        Ok(Cell((row * WIDTH + column) as u8))
    }

    /// All valid cells, bottom row first
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter(|&i| !is_gap(i)).map(|i| Cell(i as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / WIDTH
    }

    pub fn column(self) -> usize {
        self.index() % WIDTH
    }

    pub fn is_even_row(self) -> bool {
        self.row() % 2 == 0
    }

    /// Raw index of the neighbor in `direction`, or `None` at an edge.
    ///
    /// The result is not validated: it may be a structural gap, a
    /// wrapped-around cell of the adjacent row (Left/Right), or one past the
    /// last cell. Lookups treat those as empty.
    pub fn step(self, direction: Direction) -> Option<usize> {
        let index = self.index();
        let row = self.row();
        let column = self.column();
        let even = self.is_even_row();

        match direction {
            Direction::TopLeft => {
                if row == HEIGHT - 1 || (!even && column == 0) {
                    return None;
                }
                Some(if even { index + WIDTH } else { index + WIDTH - 1 })
            }
            Direction::TopRight => {
                if row == HEIGHT - 1 || (!even && column == WIDTH - 1) {
                    return None;
                }
                Some(index + WIDTH)
            }
            Direction::Right => {
                if LEFT_WALL.get(index) {
                    return None;
                }
                Some(index + 1)
            }
            Direction::Left => {
                if RIGHT_WALL.get(index) {
                    return None;
                }
                index.checked_sub(1)
            }
            Direction::BottomRight => {
                if row == 0 || (!even && column == WIDTH - 1) {
                    return None;
                }
                Some(if even { index + 1 - WIDTH } else { index - WIDTH })
            }
            Direction::BottomLeft => {
                if row == 0 || (!even && column == 0) {
                    return None;
                }
                Some(if even { index - WIDTH } else { index - WIDTH - 1 })
            }
        }
    }
}

impl TryFrom<usize> for Cell {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self> {
        Cell::new(index)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        cell.index()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (row {}, column {})", self.index(), self.row(), self.column())
    }
}

/// The six hex directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Direction {
    TopLeft = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    BottomLeft = 4,
    Left = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::Right,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::Left,
    ];

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(BoardError::UnknownDirectionIndex(index))
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::TopLeft => "top-left",
            Direction::TopRight => "top-right",
            Direction::Right => "right",
            Direction::BottomRight => "bottom-right",
            Direction::BottomLeft => "bottom-left",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts `top-left`, `top_left`, `topLeft` and the short forms `tl`, `tr`,
/// `r`, `br`, `bl`, `l`, in any case.
impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "topleft" | "tl" => Ok(Direction::TopLeft),
            "topright" | "tr" => Ok(Direction::TopRight),
            "right" | "r" => Ok(Direction::Right),
            "bottomright" | "br" => Ok(Direction::BottomRight),
            "bottomleft" | "bl" => Ok(Direction::BottomLeft),
            "left" | "l" => Ok(Direction::Left),
            _ => Err(BoardError::UnknownDirection(s.to_string())),
        }
    }
}
