use super::board::{Board, get_available_moves};
use super::game_state::Mark;
use super::win_detector::{check_win, has_won};

pub const X_WIN_SCORE: i32 = -10;
pub const O_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMove {
    pub index: usize,
    pub score: i32,
}

pub fn find_best_move(board: &Board, to_move: Mark) -> Option<SearchMove> {
    if to_move == Mark::Empty || check_win(board).is_some() {
        return None;
    }

    let (index, score) = search(*board, to_move);
    index.map(|index| SearchMove { index, score })
}

// Exhaustive full-depth minimax. Scores are from O's perspective: O
// maximizes, X minimizes. Ties keep the lowest index: candidates are
// scanned in ascending order and only a strictly better score
// replaces the stored best.
fn search(board: Board, to_move: Mark) -> (Option<usize>, i32) {
    if has_won(&board, Mark::X) {
        return (None, X_WIN_SCORE);
    }
    if has_won(&board, Mark::O) {
        return (None, O_WIN_SCORE);
    }

    let moves = get_available_moves(&board);
    if moves.is_empty() {
        return (None, DRAW_SCORE);
    }

    let maximizing = to_move == Mark::O;
    let mut best_index = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for index in moves {
        let mut next = board;
        next[index] = to_move;

        let (_, score) = search(next, if maximizing { Mark::X } else { Mark::O });

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_index = Some(index);
        }
    }

    (best_index, best_score)
}
