//! JSON envelope exchanged over `/ws`.
//!
//! Every frame carries a `type`, optional `data` and a `timestamp` that the
//! server echoes back from the request it answers.

use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub timestamp: i64,
}

impl WsMessage {
    fn reply(kind: &str, data: Value, timestamp: i64) -> Self {
        Self {
            kind: kind.to_string(),
            data: Some(data),
            timestamp,
        }
    }

    /// Answer a client message.
    pub fn respond(&self) -> Self {
        match self.kind.as_str() {
            "compile" => Self::reply(
                "compile_result",
                json!({ "status": "processing", "message": "Compilation started" }),
                self.timestamp,
            ),
            "ping" => Self::reply(
                "pong",
                json!({ "message": "Server is alive" }),
                self.timestamp,
            ),
            _ => Self::reply(
                "error",
                json!({ "message": "Unknown message type" }),
                self.timestamp,
            ),
        }
    }

    /// Reply for text frames that are not a valid envelope.
    pub fn invalid_format(error: &serde_json::Error) -> Self {
        Self::reply(
            "error",
            json!({ "message": format!("Invalid message format: {error}") }),
            Utc::now().timestamp_millis(),
        )
    }

    /// Parse a text frame and build the reply to it.
    pub fn respond_to_text(text: &str) -> Self {
        match serde_json::from_str::<WsMessage>(text) {
            Ok(message) => message.respond(),
            Err(e) => Self::invalid_format(&e),
        }
    }
}
