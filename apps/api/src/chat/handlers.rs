//! Axum route handlers for the chat assistant.

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::chat::models::parse_chat_body;
use crate::chat::prompts::system_directive;
use crate::chat::relay::spawn_relay;
use crate::errors::AppError;
use crate::profile::context_builder::relevant_context;
use crate::state::AppState;

/// POST /api/chat
///
/// Streams the assistant reply as plain text. Validation happens first (400),
/// then the credential gate (503); only then is upstream contacted.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let messages = parse_chat_body(&body)?;

    let Some(llm) = state.llm.as_ref() else {
        return Err(AppError::ServiceUnavailable(
            "Chat assistant is not configured".to_string(),
        ));
    };

    info!(messages = messages.len(), "Chat request accepted");

    let query = messages
        .last()
        .map(|m| m.content.as_str())
        .unwrap_or_default();
    let context = relevant_context(&state.profile, query);
    let system = system_directive(&state.profile.profile, &context);

    let upstream = llm.stream_completion(&system, &messages).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(spawn_relay(upstream)),
    )
        .into_response())
}
