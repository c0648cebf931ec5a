use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::{evaluate_outcome, has_win};

/// Terminal score: X wins score `-WIN_SCORE`, O wins score `WIN_SCORE`.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub index: usize,
    pub score: i32,
}

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            current_mark: state.current_mark,
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<usize> {
    best_move(&input.board, input.current_mark).map(|candidate| candidate.index)
}

/// Optimal move for `mark`, or `None` when the board is already decided
/// (won by either side or full) and there is nothing left to search.
pub fn best_move(board: &Board, mark: Mark) -> Option<MoveCandidate> {
    if evaluate_outcome(board).is_terminal() {
        return None;
    }
    select_candidate(mark, &score_moves(board, mark))
}

/// One scored candidate per empty cell, in increasing cell order.
pub fn score_moves(board: &Board, mark: Mark) -> Vec<MoveCandidate> {
    board
        .available_moves()
        .into_iter()
        .map(|index| MoveCandidate {
            index,
            score: minimax(&board.with_mark(index, mark), mark.opponent()),
        })
        .collect()
}

/// Full-depth game value of `board` with `mark` to move.
///
/// The ±WIN_SCORE terminal values are fixed from O's side and only stay
/// consistent because every level hands the move to the opponent.
pub fn minimax(board: &Board, mark: Mark) -> i32 {
    if has_win(board, Mark::X) {
        return -WIN_SCORE;
    }
    if has_win(board, Mark::O) {
        return WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    select_candidate(mark, &score_moves(board, mark))
        .map(|candidate| candidate.score)
        .unwrap_or(0)
}

/// O maximizes and X minimizes; ties keep the earliest candidate.
fn select_candidate(mark: Mark, candidates: &[MoveCandidate]) -> Option<MoveCandidate> {
    let mut best: Option<MoveCandidate> = None;

    for &candidate in candidates {
        let improves = match best {
            None => true,
            Some(current) => match mark {
                Mark::O => candidate.score > current.score,
                Mark::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(candidate);
        }
    }

    best
}
