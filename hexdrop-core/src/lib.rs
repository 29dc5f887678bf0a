//! HEXDROP Core - Bit-parallel hex puzzle board
//!
//! This crate provides the board model for HEXDROP:
//! - Board geometry (staggered hex rows flattened into a linear index)
//! - Wall masks and six-direction neighbor stepping
//! - Per-color occupancy bitboards
//! - The `/`-separated layout format (load and export)
//! - Debug rendering (ANSI or plain)

pub mod bitboard;
pub mod board;
pub mod colors;
pub mod error;
pub mod hex_board;
pub mod layout;
pub mod render;

// Re-exports for convenient access
pub use bitboard::Bitboard;
pub use board::{Cell, Direction, CELL_COUNT, HEIGHT, LEFT_WALL, RIGHT_WALL, WIDTH};
pub use colors::Color;
pub use error::{BoardError, Result};
pub use hex_board::HexBoard;
pub use render::RenderStyle;
