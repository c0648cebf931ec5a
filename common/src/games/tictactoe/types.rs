use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::str::FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(format!("Invalid mark '{}', expected X or O", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

/// Rows, columns, then the two diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] / BOARD_SIZE, self.cells[0] % BOARD_SIZE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] / BOARD_SIZE, self.cells[2] % BOARD_SIZE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Game in progress"),
            GameOutcome::Win(mark) => write!(f, "Player {} has won!", mark),
            GameOutcome::Draw => write!(f, "Game is a draw!"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    SinglePlayer,
    TwoPlayer,
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single_player" | "1" => Ok(GameMode::SinglePlayer),
            "two" | "two_player" | "2" => Ok(GameMode::TwoPlayer),
            other => Err(format!("Unknown game mode '{}', expected single or two", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent().opponent(), Mark::X);
    }

    #[test]
    fn test_mark_parses_single_character() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert!("XO".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
    }

    #[test]
    fn test_position_index_is_row_major() {
        assert_eq!(Position::from_index(5), Some(Position::new(1, 2)));
        assert_eq!(Position::new(2, 0).to_index(), 6);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_winning_lines_cover_every_cell() {
        for cell in 0..CELL_COUNT {
            assert!(WINNING_LINES.iter().any(|line| line.contains(&cell)));
        }
        let center_lines = WINNING_LINES.iter().filter(|line| line.contains(&4)).count();
        assert_eq!(center_lines, 4);
    }

    #[test]
    fn test_outcome_status_text() {
        assert_eq!(GameOutcome::Win(Mark::O).to_string(), "Player O has won!");
        assert_eq!(GameOutcome::Draw.to_string(), "Game is a draw!");
        assert!(!GameOutcome::Ongoing.is_terminal());
        assert_eq!(GameOutcome::Win(Mark::X).winner(), Some(Mark::X));
    }

    #[test]
    fn test_game_mode_parses_aliases() {
        assert_eq!("single".parse::<GameMode>(), Ok(GameMode::SinglePlayer));
        assert_eq!("2".parse::<GameMode>(), Ok(GameMode::TwoPlayer));
        assert!("three".parse::<GameMode>().is_err());
    }
}
