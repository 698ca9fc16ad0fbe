/// LLM Client — the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// Model: claude-sonnet-4-20250514 (hardcoded — do not make configurable to prevent drift)
use std::time::Duration;

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures_util::stream::{BoxStream, Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for the chat assistant.
pub const MODEL: &str = "claude-sonnet-4-20250514";
/// Generation ceiling for a single assistant reply.
pub const MAX_TOKENS: u32 = 1000;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upstream stream error ({error_type}): {message}")]
    Upstream { error_type: String, message: String },

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The two roles that exist on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// `user` stays `user`; every other role collapses to `assistant`.
    pub fn from_wire(role: &str) -> Self {
        if role == "user" {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Incremental text fragments, in arrival order.
pub type DeltaStream = BoxStream<'static, Result<String, LlmError>>;

/// Opens a streaming completion. `AppState` carries an
/// `Option<Arc<dyn CompletionStreamer>>` so tests can script the upstream.
#[async_trait]
pub trait CompletionStreamer: Send + Sync {
    /// Resolves once upstream has accepted the request; errors before the
    /// first byte are returned here, errors after it arrive in the stream.
    async fn stream_completion(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<DeltaStream, LlmError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

// SSE payloads. The `event:` field names the type; `data:` carries JSON.

#[derive(Debug, Deserialize)]
struct ContentBlockDeltaPayload {
    delta: AnthropicDelta,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum AnthropicDelta {
    #[serde(rename = "text_delta")]
    TextDelta { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    #[serde(rename = "type", default)]
    error_type: String,
    message: String,
}

/// Wraps the Anthropic Messages API in streaming mode. No retries: a failed
/// call is surfaced once.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        // No overall timeout: it would cut off long streams mid-reply.
        let client = Client::builder().connect_timeout(CONNECT_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }
}

#[async_trait]
impl CompletionStreamer for LlmClient {
    async fn stream_completion(
        &self,
        system: &str,
        messages: &[ChatMessage],
    ) -> Result<DeltaStream, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages,
            stream: true,
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            "Upstream stream opened (model: {MODEL}, messages: {})",
            messages.len()
        );

        Ok(text_deltas(response.bytes_stream()))
    }
}

/// Turns a raw SSE byte stream into text deltas.
///
/// Only `text_delta` fragments of `content_block_delta` events are yielded.
/// An `error` event ends the stream with `LlmError::Upstream`. Everything else
/// (`message_start`, `ping`, block start/stop, `message_delta`, `message_stop`,
/// non-text deltas) is dropped.
pub fn text_deltas<S, B, E>(bytes: S) -> DeltaStream
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut events = Box::pin(bytes.eventsource());

        while let Some(event) = events.next().await {
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    let message = e.to_string();
                    yield Err(LlmError::Stream(message));
                    break;
                }
            };

            match event.event.as_str() {
                "content_block_delta" => {
                    match serde_json::from_str::<ContentBlockDeltaPayload>(&event.data) {
                        Ok(ContentBlockDeltaPayload { delta: AnthropicDelta::TextDelta { text } }) => {
                            yield Ok(text);
                        }
                        Ok(_) => trace!("discarding non-text delta"),
                        Err(e) => {
                            yield Err(LlmError::Parse(e));
                            break;
                        }
                    }
                }
                "error" => {
                    let err = match serde_json::from_str::<AnthropicError>(&event.data) {
                        Ok(payload) => LlmError::Upstream {
                            error_type: payload.error.error_type,
                            message: payload.error.message,
                        },
                        Err(e) => LlmError::Parse(e),
                    };
                    yield Err(err);
                    break;
                }
                other => trace!(event = other, "discarding upstream event"),
            }
        }
    })
}
