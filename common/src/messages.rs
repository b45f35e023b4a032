use serde::{Deserialize, Serialize};

use crate::game::{GameMode, GameStatus, Mark, TicTacToeGameState, check_win_with_line};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SelectMode { mode: GameMode },
    PlaceMark { index: usize },
    Restart,
    Reload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    StateUpdate(GameStateUpdate),
    SessionCleared,
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateUpdate {
    pub cells: Vec<String>,
    pub mode: GameMode,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub status_text: String,
    pub game_active: bool,
    pub winning_line: Option<[usize; 3]>,
    pub last_move: Option<usize>,
}

impl GameStateUpdate {
    pub fn from_state(state: &TicTacToeGameState) -> Self {
        let cells = state
            .board
            .iter()
            .map(|mark| mark.symbol().to_string())
            .collect();

        let winning_line = check_win_with_line(&state.board).map(|(_, line)| line);

        Self {
            cells,
            mode: state.mode,
            current_mark: state.current_mark,
            status: state.status,
            status_text: state.status_text().to_string(),
            game_active: state.is_active(),
            winning_line,
            last_move: state.last_move,
        }
    }
}
