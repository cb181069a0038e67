use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::choose_move;
use super::error::GameError;
use super::types::{FirstPlayer, Mark, Move, Outcome, Side, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// One game between the human and the AI. Owned by the caller; the solver
/// functions only ever see its board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    first_player: FirstPlayer,
    current_turn: Side,
    outcome: Outcome,
    last_move: Option<Move>,
}

impl TicTacToeGameState {
    pub fn new(first_player: FirstPlayer, rng: &mut SessionRng) -> Self {
        Self {
            board: Board::new(),
            first_player,
            current_turn: Self::opening_side(first_player, rng),
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    /// Clears the board for a new game with the same first-player rule.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        *self = Self::new(self.first_player, rng);
    }

    fn opening_side(first_player: FirstPlayer, rng: &mut SessionRng) -> Side {
        match first_player {
            FirstPlayer::Human => Side::Player,
            FirstPlayer::Ai => Side::Ai,
            FirstPlayer::Random => {
                if rng.random_bool() {
                    Side::Player
                } else {
                    Side::Ai
                }
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_player_mark(&mut self, mv: Move) -> Result<Outcome, GameError> {
        self.place_mark(Side::Player, mv)
    }

    /// Lets the AI pick and play its move. `Ok(None)` means the board had no
    /// empty cell left.
    pub fn place_ai_mark(&mut self) -> Result<Option<Move>, GameError> {
        self.ensure_turn(Side::Ai)?;
        let Some(mv) = choose_move(&self.board) else {
            return Ok(None);
        };
        self.place_mark(Side::Ai, mv)?;
        Ok(Some(mv))
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.outcome.is_terminal() {
            return Err(GameError::GameOver);
        }
        if self.current_turn != side {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    fn place_mark(&mut self, side: Side, mv: Move) -> Result<Outcome, GameError> {
        self.ensure_turn(side)?;

        if !mv.is_in_bounds() {
            return Err(GameError::OutOfBounds(mv));
        }

        if self.board.get(mv) != Some(Mark::Empty) {
            return Err(GameError::CellOccupied(mv));
        }

        self.board.set(mv, side.mark());
        self.last_move = Some(mv);
        self.outcome = evaluate(&self.board);

        if !self.outcome.is_terminal() {
            self.current_turn = side.other();
        }

        Ok(self.outcome)
    }
}
