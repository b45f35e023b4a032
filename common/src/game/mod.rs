mod board;
mod bot_controller;
mod game_state;
mod win_detector;

pub use board::{BOARD_CELLS, Board, empty_board, get_available_moves, is_valid_move};
pub use bot_controller::{SearchMove, find_best_move};
pub use game_state::{COMPUTER_MARK, GameMode, GameStatus, Mark, TicTacToeGameState};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, has_won, is_draw};
