use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// Mark placed by the human side.
pub const PLAYER_MARK: Mark = Mark::X;
/// Mark placed by the AI side.
pub const AI_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    /// Parses a cell symbol. Empty cells may be written as "", " ", "_", "." or "-".
    pub fn from_symbol(symbol: &str) -> Option<Mark> {
        match symbol.trim() {
            "" | "_" | "." | "-" => Some(Mark::Empty),
            "X" | "x" => Some(Mark::X),
            "O" | "o" => Some(Mark::O),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    PlayerWin,
    AiWin,
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Minimax value from the AI's point of view. `None` while the game is still running.
    pub fn ai_score(self) -> Option<i32> {
        match self {
            Outcome::AiWin => Some(1),
            Outcome::PlayerWin => Some(-1),
            Outcome::Draw => Some(0),
            Outcome::InProgress => None,
        }
    }

    pub(crate) fn from_winner(mark: Mark) -> Outcome {
        match mark {
            PLAYER_MARK => Outcome::PlayerWin,
            AI_MARK => Outcome::AiWin,
            _ => Outcome::InProgress,
        }
    }
}

/// A cell coordinate, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell number as shown to players: 1..=9, row-major.
    pub fn from_cell_number(number: usize) -> Option<Self> {
        if !(1..=BOARD_SIZE * BOARD_SIZE).contains(&number) {
            return None;
        }
        let index = number - 1;
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn is_in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Move, end: Move) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    #[default]
    Human,
    Ai,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn mark(self) -> Mark {
        match self {
            Side::Player => PLAYER_MARK,
            Side::Ai => AI_MARK,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}
