pub mod game;
pub mod logger;
pub mod messages;

pub use game::{Board, GameMode, GameStatus, Mark, TicTacToeGameState};
pub use messages::{ClientMessage, GameStateUpdate, ServerMessage};
