use super::board::Board;
use super::types::{GameOutcome, Mark, WINNING_LINES, WinningLine};

pub fn has_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// X lines are reported before O lines when a board somehow shows both.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::X, Mark::O].into_iter().find_map(|mark| {
        WINNING_LINES
            .iter()
            .find(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
            .map(|&cells| WinningLine::new(mark, cells))
    })
}

pub fn evaluate_outcome(board: &Board) -> GameOutcome {
    if has_win(board, Mark::X) {
        GameOutcome::Win(Mark::X)
    } else if has_win(board, Mark::O) {
        GameOutcome::Win(Mark::O)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_winning_line_is_detected() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for index in line {
                b = b.with_mark(index, Mark::O);
            }
            assert!(has_win(&b, Mark::O), "line {:?}", line);
            assert!(!has_win(&b, Mark::X));
            assert_eq!(check_win_with_line(&b), Some(WinningLine::new(Mark::O, line)));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board("XX-OO----");
        assert!(!has_win(&b, Mark::X));
        assert!(!has_win(&b, Mark::O));
        assert_eq!(evaluate_outcome(&b), GameOutcome::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOXXOOOXX");
        assert!(is_full(&b));
        assert_eq!(evaluate_outcome(&b), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let b = board("XXXOOXXOO");
        assert_eq!(evaluate_outcome(&b), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_x_reported_before_o_when_both_present() {
        let b = board("XXXOOO---");
        assert_eq!(evaluate_outcome(&b), GameOutcome::Win(Mark::X));
        assert_eq!(check_win(&b), Some(Mark::X));
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate_outcome(&Board::new()), GameOutcome::Ongoing);
        assert_eq!(check_win_with_line(&Board::new()), None);
    }

    #[test]
    fn test_diagonal_line_endpoints() {
        let line = check_win_with_line(&board("O-X-O-X-O")).unwrap();
        assert_eq!(line.cells, [0, 4, 8]);
        assert_eq!(line.start(), Position::new(0, 0));
        assert_eq!(line.end(), Position::new(2, 2));
    }

    #[test]
    fn test_outcome_is_exclusive_on_reachable_boards() {
        fn explore(b: Board, mark: Mark, visited: &mut usize) {
            *visited += 1;
            let x_won = has_win(&b, Mark::X);
            let o_won = has_win(&b, Mark::O);
            assert!(!(x_won && o_won), "both won: {}", b.to_compact_string());

            let outcome = evaluate_outcome(&b);
            match outcome {
                GameOutcome::Win(Mark::X) => assert!(x_won),
                GameOutcome::Win(Mark::O) => assert!(o_won),
                GameOutcome::Draw => assert!(!x_won && !o_won && is_full(&b)),
                GameOutcome::Ongoing => assert!(!x_won && !o_won && !is_full(&b)),
            }
            if outcome.is_terminal() {
                return;
            }
            for index in b.available_moves() {
                explore(b.with_mark(index, mark), mark.opponent(), visited);
            }
        }

        let mut visited = 0;
        explore(Board::new(), Mark::X, &mut visited);
        // Every path of the full game tree, counting the root.
        assert_eq!(visited, 549_946);
    }
}
