use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Move, Outcome, WinningLine};

/// Every line in the order it is checked: rows, columns, main diagonal, anti-diagonal.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Terminal-state check for the current board. Pure function of the cells.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = check_win_with_line(board) {
        return Outcome::from_winner(line.mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line, honouring the row/column/diagonal precedence.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        uniform_mark(board, line).map(|mark| {
            let (start_row, start_col) = line[0];
            let (end_row, end_col) = line[BOARD_SIZE - 1];
            WinningLine::new(
                mark,
                Move::new(start_row, start_col),
                Move::new(end_row, end_col),
            )
        })
    })
}

pub(crate) fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| uniform_mark(board, line) == Some(mark))
}

#[inline(always)]
fn uniform_mark(board: &Board, line: &[(usize, usize); BOARD_SIZE]) -> Option<Mark> {
    let (row, col) = line[0];
    let mark = board.cell(row, col);
    if mark == Mark::Empty {
        return None;
    }
    line.iter()
        .all(|&(row, col)| board.cell(row, col) == mark)
        .then_some(mark)
}
