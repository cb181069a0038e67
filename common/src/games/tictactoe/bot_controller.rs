use super::board::Board;
use super::types::{AI_MARK, Mark, Move, PLAYER_MARK};
use super::win_detector::evaluate;

/// Exhaustive minimax value of `board`, from the AI's point of view: +1 AI
/// wins, -1 player wins, 0 draw under optimal play by both sides.
///
/// Cells are set and cleared in place while walking the tree. Every path
/// clears what it set, so `board` is unchanged when this returns.
pub fn score(board: &mut Board, ai_to_move: bool) -> i32 {
    if let Some(terminal) = evaluate(board).ai_score() {
        return terminal;
    }

    let mark = if ai_to_move { AI_MARK } else { PLAYER_MARK };
    let mut best = if ai_to_move { i32::MIN } else { i32::MAX };

    for mv in board.available_moves() {
        board.set(mv, mark);
        let child = score(board, !ai_to_move);
        board.set(mv, Mark::Empty);

        best = if ai_to_move {
            best.max(child)
        } else {
            best.min(child)
        };
    }

    best
}

/// Optimal cell for the AI. Ties go to the earliest cell in row-major order.
///
/// Returns `None` when the board has no empty cell. Callers check for a
/// finished game before asking for a move.
pub fn choose_move(board: &Board) -> Option<Move> {
    let mut scratch = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for mv in board.available_moves() {
        scratch.set(mv, AI_MARK);
        let move_score = score(&mut scratch, false);
        scratch.set(mv, Mark::Empty);

        if move_score > best_score {
            best_score = move_score;
            best_move = Some(mv);
        }
    }

    best_move
}
