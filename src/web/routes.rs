use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Streaming
        .route("/chat", post(super::handlers::chat::chat_stream))

        // Health check
        .route("/health", get(super::handlers::health::health_check))

        .with_state(state)
}
