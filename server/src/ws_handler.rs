use axum::extract::ws::{Message, WebSocket};
use common::{ClientMessage, GameStateUpdate, ServerMessage, TicTacToeGameState, log};
use futures_util::{SinkExt, StreamExt};

pub async fn handle_websocket(socket: WebSocket) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // One game session per connection; both marks in PvP mode sit at
    // the same browser page.
    let mut session: Option<TicTacToeGameState> = None;

    log!("WebSocket client connected");

    while let Some(result) = ws_receiver.next().await {
        let msg = match result {
            Ok(msg) => msg,
            Err(e) => {
                log!("WebSocket receive error: {}", e);
                break;
            }
        };

        let text = match msg {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let client_message: ClientMessage = match serde_json::from_str(text.as_str()) {
            Ok(m) => m,
            Err(e) => {
                log!("Failed to decode client message: {}", e);
                continue;
            }
        };

        let Some(reply) = apply_message(&mut session, client_message) else {
            continue;
        };

        let payload = match serde_json::to_string(&reply) {
            Ok(payload) => payload,
            Err(e) => {
                log!("Failed to encode server message: {}", e);
                continue;
            }
        };

        if ws_sender.send(Message::Text(payload.into())).await.is_err() {
            break;
        }
    }

    log!("WebSocket client disconnected");
}

fn apply_message(
    session: &mut Option<TicTacToeGameState>,
    message: ClientMessage,
) -> Option<ServerMessage> {
    match message {
        ClientMessage::SelectMode { mode } => {
            let state = TicTacToeGameState::new(mode);
            let reply = state_update(&state);
            *session = Some(state);
            Some(reply)
        }
        ClientMessage::PlaceMark { index } => match session.as_mut() {
            Some(state) => match state.handle_cell_click(index) {
                Ok(()) => Some(state_update(state)),
                Err(e) => {
                    // Occupied cell or finished game: a silent no-op
                    // for the client, only logged here.
                    log!("Rejected click at {}: {}", index, e);
                    None
                }
            },
            None => Some(no_active_game_error()),
        },
        ClientMessage::Restart => match session.as_mut() {
            Some(state) => {
                state.reset();
                Some(state_update(state))
            }
            None => Some(no_active_game_error()),
        },
        ClientMessage::Reload => {
            *session = None;
            Some(ServerMessage::SessionCleared)
        }
    }
}

fn state_update(state: &TicTacToeGameState) -> ServerMessage {
    ServerMessage::StateUpdate(GameStateUpdate::from_state(state))
}

fn no_active_game_error() -> ServerMessage {
    ServerMessage::Error {
        message: "No active game; select a mode first".to_string(),
    }
}
