//! Error types for board construction and queries

/// Errors raised by the board model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Invalid character {ch:?} at position {position} in layout")]
    InvalidCharacter { ch: char, position: usize },

    #[error("Cell index {0} is a structural gap or off the board")]
    OutOfRangeIndex(usize),

    #[error("Layout places a color at index {index} (character {position}), past the last cell")]
    LayoutOverflow { index: usize, position: usize },

    #[error("Unknown color index: {0}")]
    UnknownColorIndex(u8),

    #[error("Unknown direction index: {0}")]
    UnknownDirectionIndex(u8),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
}

pub type Result<T> = std::result::Result<T, BoardError>;
