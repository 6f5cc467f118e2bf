use crate::types::events::{StreamEvent, StreamOutcome};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;

/// Spawns one producer task per stream and hands back the receiving end.
///
/// The task emits tokens in order with `delay` between consecutive events.
/// Dropping the returned stream (client disconnect) stops the task at its
/// next suspension point.
#[derive(Debug, Clone)]
pub struct TokenStreamer {
    delay: Duration,
    buffer: usize,
}

impl TokenStreamer {
    pub fn new(delay: Duration, buffer: usize) -> Self {
        Self {
            delay,
            buffer: buffer.max(1),
        }
    }

    pub fn spawn(
        &self,
        stream_id: String,
        tokens: Vec<String>,
    ) -> (ReceiverStream<StreamEvent>, JoinHandle<StreamOutcome>) {
        let (tx, rx) = mpsc::channel(self.buffer);
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            let outcome = produce(tx, tokens, delay).await;
            match outcome {
                StreamOutcome::Completed { sent } => {
                    tracing::debug!(%stream_id, sent, "stream completed");
                }
                StreamOutcome::Cancelled { sent } => {
                    tracing::debug!(%stream_id, sent, "client disconnected, stream cancelled");
                }
            }
            outcome
        });

        (ReceiverStream::new(rx), handle)
    }
}

async fn produce(
    tx: mpsc::Sender<StreamEvent>,
    tokens: Vec<String>,
    delay: Duration,
) -> StreamOutcome {
    let mut sent = 0;

    for token in &tokens {
        if sent > 0 {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = tx.closed() => return StreamOutcome::Cancelled { sent },
            }
        }

        if tx.send(StreamEvent::token(token)).await.is_err() {
            return StreamOutcome::Cancelled { sent };
        }
        sent += 1;
    }

    StreamOutcome::Completed { sent }
}
