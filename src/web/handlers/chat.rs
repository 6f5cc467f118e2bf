//! `POST /chat`: validate, compose, then stream the reply token by token.

use crate::services::tokenize;
use crate::state::AppState;
use crate::types::{AppError, ChatRequest};
use axum::{
    body::Bytes,
    extract::State,
    response::sse::{Event, Sse},
};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use uuid::Uuid;

/// Everything that can fail happens before `Sse` is returned, so a rejected
/// request never produces a partial stream.
pub async fn chat_stream(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let request = ChatRequest::from_slice(&body)?;
    let reply = state.composer.compose(&request)?;
    let tokens = tokenize(&reply);

    let stream_id = Uuid::now_v7().to_string();
    tracing::info!(
        %stream_id,
        user_id = request.user_id.as_deref().unwrap_or("-"),
        messages = request.messages.len(),
        categories = request.categories().len(),
        tokens = tokens.len(),
        "📡 Opening brain stream"
    );

    // The join handle is detached; the task ends on its own when the body is dropped.
    let (events, _handle) = state.streamer.spawn(stream_id, tokens);

    let stream = events.map(|event| Ok::<_, Infallible>(Event::default().data(event.to_sse_data())));

    Ok(Sse::new(stream))
}
