pub mod composer;
pub mod streaming;

pub use composer::{CannedReply, ReplyComposer};
pub use streaming::{tokenize, TokenStreamer};
