use thiserror::Error;

use super::types::Move;

/// Rejections at the board parsing boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must be 3x3, got {rows} rows with {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("unrecognized mark '{symbol}' at ({row}, {col})")]
    InvalidMark {
        symbol: String,
        row: usize,
        col: usize,
    },

    #[error("both X and O have a completed line")]
    ConflictingWinners,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("position {0} is out of bounds")]
    OutOfBounds(Move),

    #[error("cell {0} is already marked")]
    CellOccupied(Move),
}
