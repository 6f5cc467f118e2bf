pub mod errors;
pub mod events;
pub mod message;

pub use errors::AppError;
pub use events::{StreamEvent, StreamOutcome};
pub use message::{AttentionCategory, ChatRequest};
