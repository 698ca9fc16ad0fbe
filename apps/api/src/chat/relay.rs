//! Chat Relay — copies upstream text deltas into the outbound response body.
//!
//! A producer task drains the upstream [`DeltaStream`] into a bounded channel;
//! the receiving half becomes the HTTP body. Forward-only, no buffering beyond
//! the channel, no transformation of the text.
//!
//! - Upstream ends: the sender is dropped, the body ends cleanly.
//! - Upstream fails: the error is pushed into the body, which makes the server
//!   abort the response. Text already sent stays sent.
//! - Caller disconnects: `Sender::closed` fires, the producer stops polling and
//!   drops the upstream stream, releasing the HTTP connection to Anthropic.

use bytes::Bytes;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info};

use crate::llm_client::{DeltaStream, LlmError};

/// Deltas buffered between the upstream reader and the response writer.
const RELAY_CHANNEL_CAPACITY: usize = 32;

pub type RelayBody = ReceiverStream<Result<Bytes, LlmError>>;

/// Spawns the producer task and returns the consumer side.
pub fn spawn_relay(upstream: DeltaStream) -> RelayBody {
    let (tx, rx) = mpsc::channel(RELAY_CHANNEL_CAPACITY);
    tokio::spawn(pump(upstream, tx));
    ReceiverStream::new(rx)
}

async fn pump(mut upstream: DeltaStream, tx: mpsc::Sender<Result<Bytes, LlmError>>) {
    let mut forwarded = 0usize;

    loop {
        tokio::select! {
            _ = tx.closed() => {
                debug!(forwarded, "Chat client disconnected; releasing upstream stream");
                return;
            }
            next = upstream.next() => {
                match next {
                    Some(Ok(text)) => {
                        if tx.send(Ok(Bytes::from(text))).await.is_err() {
                            debug!(forwarded, "Chat client disconnected; releasing upstream stream");
                            return;
                        }
                        forwarded += 1;
                    }
                    Some(Err(e)) => {
                        error!(forwarded, "Upstream stream failed: {e}");
                        let _ = tx.send(Err(e)).await;
                        return;
                    }
                    None => {
                        info!(forwarded, "Chat stream finished");
                        return;
                    }
                }
            }
        }
    }
}
