use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::types::{BOARD_SIZE, Mark, Move};
use super::win_detector::has_line;

/// 3x3 grid, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from symbol rows such as `[["X", "O", ""], ...]`.
    ///
    /// Rejects anything that is not 3x3, any unknown symbol, and boards on
    /// which both sides have completed a line.
    pub fn from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidDimensions {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != BOARD_SIZE) {
            return Err(BoardError::InvalidDimensions {
                rows: rows.len(),
                cols: row.len(),
            });
        }

        let mut board = Board::new();
        for (row, symbols) in rows.iter().enumerate() {
            for (col, symbol) in symbols.iter().enumerate() {
                let symbol = symbol.as_ref();
                let mark = Mark::from_symbol(symbol).ok_or_else(|| BoardError::InvalidMark {
                    symbol: symbol.to_string(),
                    row,
                    col,
                })?;
                board.cells[row][col] = mark;
            }
        }

        if has_line(&board, Mark::X) && has_line(&board, Mark::O) {
            return Err(BoardError::ConflictingWinners);
        }

        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|mark| mark.symbol().to_string()).collect())
            .collect()
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Panics if `row` or `col` is out of bounds. [`Board::get`] is the
    /// checked variant.
    pub fn cell(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Overwrites a cell. Panics if `mv` is out of bounds.
    pub fn set(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row][mv.col] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn is_empty(&self) -> bool {
        self.count(Mark::Empty) == BOARD_SIZE * BOARD_SIZE
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Compact form: three rows of three symbols separated by `/` or newlines,
    /// e.g. `"XX_/OO_/___"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<String>> = s
            .split(['/', '\n'])
            .map(|row| row.trim_end_matches('\r'))
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().map(String::from).collect())
            .collect();
        Board::from_rows(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            writeln!(f, " {} | {} | {} ", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}
