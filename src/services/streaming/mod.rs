//! Paced token streaming

mod producer;

pub use producer::TokenStreamer;

/// Naive whitespace tokenization. Punctuation stays attached to its word.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
