use crate::bitboard::MAX_CELLS;

/// Errors raised while building boards or decoding tile states.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A character outside the board alphabet. `line` counts non-blank lines
    /// and `column` counts characters after trimming, both from 1.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        column: usize,
    },

    /// The text held no non-blank line, or a piece shape with no filled cell.
    #[error("board text is empty")]
    EmptyBoard,

    #[error("board of {width}x{height} exceeds the {max}-cell capacity", max = MAX_CELLS)]
    TooLarge { width: usize, height: usize },

    /// A tile-state value that names none of interior, side, corner, empty.
    #[error("invalid tile state: {0:?}")]
    InvalidState(String),
}
