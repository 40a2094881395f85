//! WebSocket push channel.
//!
//! Clients connect, receive every relay notice as a text frame, and are
//! never filtered or authenticated. The server ignores application frames
//! from the client; only close (or a dead socket) ends the session.

use crate::state::AppState;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::Response,
};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

pub async fn events_ws(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    tracing::info!("Push channel client connected");

    let mut notices = state.broadcaster.subscribe();

    loop {
        tokio::select! {
            notice = notices.recv() => match notice {
                Ok(notice) => {
                    if socket.send(Message::Text(notice.message.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "Push channel client lagged, notices dropped");
                }
                Err(RecvError::Closed) => break,
            },
            frame = socket.recv() => match frame {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // Client frames carry nothing.
                Some(Err(_)) => break,
            },
        }
    }

    tracing::info!("Push channel client disconnected");
}
