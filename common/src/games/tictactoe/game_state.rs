use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{CELL_COUNT, GameMode, GameOutcome, Mark, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

/// The computer always answers as O; X moves first and belongs to the human.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_mark: Mark,
    pub outcome: GameOutcome,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_mark: Mark::X,
            outcome: GameOutcome::Ongoing,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn computer_mark(&self) -> Option<Mark> {
        match self.mode {
            GameMode::SinglePlayer => Some(COMPUTER_MARK),
            GameMode::TwoPlayer => None,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.computer_mark() == Some(self.current_mark)
    }

    /// Human move for whoever's turn it is.
    pub fn place_mark(&mut self, index: usize) -> Result<GameOutcome, String> {
        if self.outcome.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if self.is_computer_turn() {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty_cell(index) {
            return Err("Cell is already marked".to_string());
        }

        self.apply_move(index);
        Ok(self.outcome)
    }

    pub fn apply_computer_move(&mut self) -> Result<usize, String> {
        if self.outcome.is_terminal() {
            return Err("Game is already over".to_string());
        }

        if !self.is_computer_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let index = calculate_move(BotInput::from_game_state(self))
            .ok_or_else(|| "No legal move available".to_string())?;

        crate::debug_log!("Computer {} plays cell {}", self.current_mark, index);
        self.apply_move(index);
        Ok(index)
    }

    fn apply_move(&mut self, index: usize) {
        self.board.set(index, self.current_mark);
        self.last_move = Position::from_index(index);

        self.outcome = evaluate_outcome(&self.board);
        self.winning_line = check_win_with_line(&self.board);

        if !self.outcome.is_terminal() {
            self.current_mark = self.current_mark.opponent();
        }
    }

    /// Clears the board for a rematch in the same mode.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }

    pub fn status_text(&self) -> String {
        match self.outcome {
            GameOutcome::Ongoing => format!("It's {}'s turn", self.current_mark),
            outcome => outcome.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new(GameMode::TwoPlayer);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.outcome, GameOutcome::Ongoing);
        assert_eq!(state.status_text(), "It's X's turn");
        assert_eq!(state.computer_mark(), None);
    }

    #[test]
    fn test_two_player_turns_alternate() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer);
        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.board.get(4), Some(Mark::X));
        assert_eq!(state.board.get(0), Some(Mark::O));
        assert_eq!(state.last_move, Some(Position::new(0, 0)));
    }

    #[test]
    fn test_place_mark_rejects_occupied_and_out_of_bounds() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer);
        state.place_mark(4).unwrap();
        assert_eq!(state.place_mark(4), Err("Cell is already marked".to_string()));
        assert_eq!(state.place_mark(9), Err("Position out of bounds".to_string()));
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_win_stops_the_game() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer);
        for index in [0, 3, 1, 4] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.place_mark(2), Ok(GameOutcome::Win(Mark::X)));
        assert_eq!(state.status_text(), "Player X has won!");
        assert_eq!(state.winning_line.map(|line| line.cells), Some([0, 1, 2]));
        assert_eq!(state.place_mark(8), Err("Game is already over".to_string()));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_full_board_is_draw() {
        let mut state = TicTacToeGameState::new(GameMode::TwoPlayer);
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.outcome, GameOutcome::Draw);
        assert_eq!(state.status_text(), "Game is a draw!");
    }

    #[test]
    fn test_single_player_waits_for_computer() {
        let mut state = TicTacToeGameState::new(GameMode::SinglePlayer);
        assert!(!state.is_computer_turn());
        assert!(state.apply_computer_move().is_err());

        state.place_mark(0).unwrap();
        assert!(state.is_computer_turn());
        assert_eq!(state.place_mark(1), Err("Not your turn".to_string()));

        let reply = state.apply_computer_move().unwrap();
        assert_eq!(state.board.get(reply), Some(Mark::O));
        assert_eq!(state.current_mark, Mark::X);
    }

    #[test]
    fn test_computer_blocks_human_column() {
        let mut state = TicTacToeGameState::new(GameMode::SinglePlayer);
        state.place_mark(4).unwrap();
        assert_eq!(state.apply_computer_move(), Ok(0));
        state.place_mark(1).unwrap();
        assert_eq!(state.apply_computer_move(), Ok(7));
        assert_eq!(state.outcome, GameOutcome::Ongoing);
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut state = TicTacToeGameState::new(GameMode::SinglePlayer);
        state.place_mark(4).unwrap();
        state.reset();
        assert_eq!(state.mode, GameMode::SinglePlayer);
        assert_eq!(state.board, Board::new());
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, None);
    }
}
