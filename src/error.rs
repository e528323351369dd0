use thiserror::Error;

use crate::Position;

/// The enum represents all the variants of what can possibly go wrong when working with grids.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Used when the user tries to create a grid with a zero-sized side.
    #[error("the grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
    /// Used when the required number of mines is less than 1 or is not less than the total number of cells (there
    /// should always be at least one mine and at least one cell without a mine).
    ///
    /// The value represents the maximum allowed number of mines for the grid with the given dimensions.
    #[error("the amount of mines must be between 1 and {0}")]
    InvalidMinesAmount(u16),
    /// Used when an interaction targets a position beyond the grid's bounds.
    #[error("the position {0:?} is outside of the grid")]
    OutOfBounds(Position),
    /// Used when an explicit mine layout places a mine beyond the grid's bounds.
    #[error("the mine at {0:?} is outside of the grid")]
    MineOutOfBounds(Position),
    /// Used when an explicit mine layout lists the same position more than once.
    #[error("the position {0:?} is mined more than once")]
    DuplicateMine(Position),
}

impl GridError {
    /// Checks whether the error has been caused by a bad grid configuration, i.e. no grid could be created at all.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, GridError::OutOfBounds(_))
    }
}
