use std::fmt::Write;

use tictactoe_common::tictactoe::{
    Board, GameMode, GameOutcome, Mark, TicTacToeGameState, best_move, evaluate_outcome,
    score_moves,
};
use tictactoe_common::{debug_log, log};

pub fn outcome(board: &str) -> Result<String, String> {
    let board: Board = board.parse()?;
    let outcome = evaluate_outcome(&board);
    Ok(format!("{}\n{}", board, outcome))
}

pub fn best_move_for(board: &str, mark: Mark, show_scores: bool) -> Result<String, String> {
    let board: Board = board.parse()?;

    let candidate = best_move(&board, mark).ok_or_else(|| match evaluate_outcome(&board) {
        GameOutcome::Draw => "Board is full, there is no move to make".to_string(),
        outcome => format!("Game is already over: {}", outcome),
    })?;

    let mut output = format!("{}", candidate.index);
    if show_scores {
        for scored in score_moves(&board, mark) {
            let _ = write!(output, "\n  cell {}: {}", scored.index, scored.score);
        }
    }
    Ok(output)
}

/// Replays `moves` as human clicks; the computer answers in single-player mode.
pub fn play(mode: GameMode, moves: &[usize]) -> Result<String, String> {
    let mut state = TicTacToeGameState::new(mode);
    let mut output = String::new();

    for (turn, &index) in moves.iter().enumerate() {
        if state.outcome.is_terminal() {
            log!("Ignoring {} move(s) after the game ended", moves.len() - turn);
            break;
        }

        let mark = state.current_mark;
        state
            .place_mark(index)
            .map_err(|e| format!("Move {} (cell {}): {}", turn + 1, index, e))?;
        let _ = writeln!(output, "{} -> {}", mark, index);

        if state.is_computer_turn() {
            let computer = state.current_mark;
            let reply = state.apply_computer_move()?;
            let _ = writeln!(output, "{} -> {}", computer, reply);
        }
    }

    let _ = write!(output, "{}\n{}", state.board, state.status_text());
    Ok(output)
}

/// Optimal X against optimal O from an empty board.
pub fn self_play() -> Result<String, String> {
    let mut board = Board::new();
    let mut mark = Mark::X;
    let mut output = String::new();

    while !evaluate_outcome(&board).is_terminal() {
        let candidate =
            best_move(&board, mark).ok_or_else(|| "No legal move available".to_string())?;
        debug_log!("{} plays {} (score {})", mark, candidate.index, candidate.score);
        let _ = writeln!(output, "{} -> {}", mark, candidate.index);
        board = board.with_mark(candidate.index, mark);
        mark = mark.opponent();
    }

    let _ = write!(output, "{}\n{}", board, evaluate_outcome(&board));
    Ok(output)
}
