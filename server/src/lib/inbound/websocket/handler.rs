use std::time::Duration;

use axum::extract::ws::Message as WebSocketMessage;
use axum::extract::ws::WebSocket;
use axum::extract::WebSocketUpgrade;
use axum::response::Response;
use futures::SinkExt;
use futures::StreamExt;
use tokio::time::interval;
use tokio::time::Instant;
use uuid::Uuid;

use super::messages::WsMessage;

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);

/// Silence from the client longer than this closes the connection
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Whether a client last heard from at `last_heartbeat` has gone silent at `now`.
fn client_timed_out(last_heartbeat: Instant, now: Instant) -> bool {
    now.saturating_duration_since(last_heartbeat) > CLIENT_TIMEOUT
}

/// WebSocket upgrade handler
pub async fn websocket_handler(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(handle_socket)
}

/// Answer envelopes, echo binary frames and drop silent clients.
async fn handle_socket(socket: WebSocket) {
    let connection_id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let mut last_heartbeat = Instant::now();
    let mut heartbeat = interval(HEARTBEAT_INTERVAL);

    tracing::info!(%connection_id, "WebSocket connection opened");

    let reason = loop {
        tokio::select! {
            frame = receiver.next() => {
                let Some(Ok(frame)) = frame else {
                    break "client disconnected";
                };
                last_heartbeat = Instant::now();

                // Protocol pings are answered by the transport.
                let reply = match frame {
                    WebSocketMessage::Text(text) => {
                        let reply = WsMessage::respond_to_text(&text);
                        match serde_json::to_string(&reply) {
                            Ok(json) => Some(WebSocketMessage::Text(json)),
                            Err(e) => {
                                tracing::error!(%connection_id, error = %e, "Failed to encode reply");
                                None
                            }
                        }
                    }
                    WebSocketMessage::Binary(bytes) => Some(WebSocketMessage::Binary(bytes)),
                    WebSocketMessage::Ping(_) | WebSocketMessage::Pong(_) => None,
                    WebSocketMessage::Close(_) => break "client closed",
                };

                if let Some(reply) = reply {
                    if sender.send(reply).await.is_err() {
                        break "send failed";
                    }
                }
            }

            _ = heartbeat.tick() => {
                if client_timed_out(last_heartbeat, Instant::now()) {
                    break "heartbeat timeout";
                }
                if sender.send(WebSocketMessage::Ping(Vec::new())).await.is_err() {
                    break "send failed";
                }
            }
        }
    };

    let _ = sender.close().await;

    tracing::info!(%connection_id, reason, "WebSocket connection closed");
}
