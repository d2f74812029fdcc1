//! Error types.

use thiserror::Error;

/// Largest board the engine accepts.
pub const MAX_BOARD_SIZE: usize = 100;

/// Errors surfaced before a search starts.
///
/// The search loops themselves are total; every variant here is a
/// precondition or configuration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size outside `1..=MAX_BOARD_SIZE`.
    #[error("board size must be in 1..={max}, got {size}")]
    InvalidBoardSize { size: usize, max: usize },

    /// A row index does not fit on the board.
    #[error("row {row} in column {column} is out of range for a {size}x{size} board")]
    RowOutOfRange {
        column: usize,
        row: usize,
        size: usize,
    },

    /// Strategy selector could not be parsed.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// A configuration value is invalid.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, QueensError>;

/// Checks that `size` is a board size the engine accepts.
pub fn check_board_size(size: usize) -> Result<()> {
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(QueensError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}
