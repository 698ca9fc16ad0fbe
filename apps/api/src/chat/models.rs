//! Chat request parsing. The body is validated by hand so every malformed
//! payload becomes a 400 with a short message instead of an extractor rejection.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, Role};

/// One conversation turn as the browser sends it.
#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    pub role: String,
    pub content: String,
}

impl From<IncomingMessage> for ChatMessage {
    fn from(msg: IncomingMessage) -> Self {
        ChatMessage {
            role: Role::from_wire(&msg.role),
            content: msg.content,
        }
    }
}

/// Parses `{ "messages": [{role, content}, ...] }` into upstream messages,
/// preserving order and collapsing roles.
pub fn parse_chat_body(body: &[u8]) -> Result<Vec<ChatMessage>, AppError> {
    let payload: Value = serde_json::from_slice(body)
        .map_err(|_| AppError::Validation("Request body must be valid JSON".to_string()))?;

    let messages = match payload.get("messages") {
        Some(Value::Array(items)) => items,
        _ => return Err(AppError::Validation("Invalid messages format".to_string())),
    };

    if messages.is_empty() {
        return Err(AppError::Validation("messages cannot be empty".to_string()));
    }

    messages
        .iter()
        .enumerate()
        .map(|(i, item)| {
            IncomingMessage::deserialize(item)
                .map(ChatMessage::from)
                .map_err(|_| {
                    AppError::Validation(format!(
                        "messages[{i}] must have string 'role' and 'content' fields"
                    ))
                })
        })
        .collect()
}
