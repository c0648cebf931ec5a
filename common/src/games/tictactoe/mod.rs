mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, MoveCandidate, WIN_SCORE, best_move, calculate_move, minimax, score_moves,
};
pub use game_state::{COMPUTER_MARK, TicTacToeGameState};
pub use types::{
    BOARD_SIZE, CELL_COUNT, GameMode, GameOutcome, Mark, Position, WINNING_LINES, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome, has_win, is_full};
