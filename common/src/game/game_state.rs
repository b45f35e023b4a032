use serde::{Deserialize, Serialize};

use super::board::{BOARD_CELLS, Board, empty_board};
use super::bot_controller::find_best_move;
use super::win_detector::{check_win, is_draw};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => "",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

// In PvC mode the human plays X and moves first.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: empty_board(),
            mode,
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn handle_cell_click(&mut self, index: usize) -> Result<(), String> {
        self.place_mark(index)?;

        if self.mode == GameMode::PlayerVsComputer
            && self.status == GameStatus::InProgress
            && self.current_mark == COMPUTER_MARK
        {
            self.play_computer_turn()?;
        }

        Ok(())
    }

    fn place_mark(&mut self, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if index >= BOARD_CELLS {
            return Err(format!("Cell index {} out of bounds", index));
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = self.current_mark;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn play_computer_turn(&mut self) -> Result<(), String> {
        let best = find_best_move(&self.board, self.current_mark)
            .ok_or_else(|| "No move available for the computer".to_string())?;
        self.place_mark(best.index)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_draw(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn reset(&mut self) {
        self.board = empty_board();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            GameStatus::InProgress => "",
            GameStatus::XWon => "Player X has won!",
            GameStatus::OWon => "Player O has won!",
            GameStatus::Draw => "Game ended in a draw!",
        }
    }
}
