use crate::config::Config;
use crate::services::{CannedReply, ReplyComposer, TokenStreamer};
use std::sync::Arc;

/// Per-process state handed to every handler. Immutable once built.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub composer: Arc<dyn ReplyComposer>,
    pub streamer: TokenStreamer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_composer(config, Arc::new(CannedReply))
    }

    pub fn with_composer(config: Config, composer: Arc<dyn ReplyComposer>) -> Self {
        tracing::info!("[STATE] Initializing AppState...");
        tracing::info!("[STATE]   Token delay: {}ms", config.token_delay_ms);
        tracing::info!("[STATE]   Stream buffer: {}", config.stream_buffer);

        let streamer = TokenStreamer::new(config.token_delay(), config.stream_buffer);

        Self {
            config: Arc::new(config),
            composer,
            streamer,
        }
    }
}
