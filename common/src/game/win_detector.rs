use super::board::Board;
use super::game_state::Mark;

// 3 rows, 3 columns, 2 diagonals.
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

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board[index] == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some((mark, line));
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty) && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_top_row_wins() {
        let board = [X, X, X, O, O, E, E, E, E];

        assert!(has_won(&board, X));
        assert!(!has_won(&board, O));
        assert_eq!(check_win(&board), Some(X));
    }

    #[test]
    fn test_each_winning_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = [E; 9];
            for index in line {
                board[index] = O;
            }

            assert!(has_won(&board, O), "line {:?} not detected", line);
            assert_eq!(check_win_with_line(&board), Some((O, line)));
        }
    }

    #[test]
    fn test_column_win_for_o() {
        let board = [O, X, X, O, X, E, O, E, E];

        assert!(has_won(&board, O));
        assert!(!has_won(&board, X));
        assert_eq!(check_win_with_line(&board), Some((O, [0, 3, 6])));
    }

    #[test]
    fn test_diagonal_win() {
        let board = [X, O, E, O, X, E, E, E, X];

        assert_eq!(check_win_with_line(&board), Some((X, [0, 4, 8])));
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = [E; 9];

        assert_eq!(check_win(&board), None);
        assert!(!has_won(&board, X));
        assert!(!has_won(&board, O));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        let board = [E; 9];

        assert!(!has_won(&board, E));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = [X, O, X, O, X, O, O, X, O];

        assert!(is_draw(&board));
        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_won_board_is_not_draw() {
        let board = [X, X, X, O, O, X, O, X, O];

        assert!(!is_draw(&board));
    }

    #[test]
    fn test_board_with_empty_cells_is_not_draw() {
        let board = [X, O, X, O, X, O, O, X, E];

        assert!(!is_draw(&board));
    }
}
