mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{choose_move, score};
pub use error::{BoardError, GameError};
pub use game_state::TicTacToeGameState;
pub use types::{AI_MARK, BOARD_SIZE, FirstPlayer, Mark, Move, Outcome, PLAYER_MARK, Side, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
