use super::game_state::Mark;

pub const BOARD_CELLS: usize = 9;

pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    index < BOARD_CELLS && board[index] == Mark::Empty
}
