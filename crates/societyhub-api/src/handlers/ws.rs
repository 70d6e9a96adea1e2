//! WebSocket upgrade handler for the live notification feed.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

use crate::state::AppState;

/// GET /ws — WebSocket upgrade
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_connection(state, socket))
}

/// Handles an established WebSocket connection.
///
/// Every event published to the hub after this point is forwarded to the
/// client as a JSON text frame. There is no backlog: the client is
/// expected to reconcile via the notification list endpoint on connect.
async fn handle_connection(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let mut events = state.hub.subscribe();

    info!(
        listeners = state.hub.subscriber_count(),
        "Live feed listener connected"
    );

    let forward_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(msg) => {
                    let text = match serde_json::to_string(&msg) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(error = %e, "Failed to serialize feed event");
                            continue;
                        }
                    };
                    if ws_tx.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    // Dropped events are recovered through the list
                    // endpoint, not replayed here.
                    warn!(skipped, "Listener lagged behind the live feed");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "WebSocket error");
                break;
            }
        }
    }

    forward_task.abort();
    info!("Live feed listener disconnected");
}
