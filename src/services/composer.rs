//! Reply composition
//!
//! The canned reply stands in for a real generation engine. Anything that
//! implements [`ReplyComposer`] can replace it without touching the
//! streaming side.

use crate::types::{AppError, ChatRequest};

pub const GREETING: &str = "Cześć Greg! Tu Twój Mózg. ";
pub const FOCUS_PREFIX: &str = "Skupiam uwagę na Twoich kategoriach: ";
pub const CLOSING: &str =
    "Streaming działa, most jest drożny. Czekam na Twoje instrukcje w Pythonie.";

pub trait ReplyComposer: Send + Sync {
    /// Build the full reply text for a request. Runs before any event is sent.
    fn compose(&self, request: &ChatRequest) -> Result<String, AppError>;
}

/// Deterministic greeting that echoes the caller's categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedReply;

impl ReplyComposer for CannedReply {
    fn compose(&self, request: &ChatRequest) -> Result<String, AppError> {
        let names = request.category_names()?;

        let mut reply = String::from(GREETING);
        if !names.is_empty() {
            reply.push_str(FOCUS_PREFIX);
            reply.push_str(&names.join(", "));
            reply.push_str(". ");
        }
        reply.push_str(CLOSING);

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttentionCategory;

    fn request_with(names: &[&str]) -> ChatRequest {
        ChatRequest {
            attention_map: Some(names.iter().map(|n| AttentionCategory::named(*n)).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_reply() {
        let reply = CannedReply.compose(&ChatRequest::default()).unwrap();
        assert_eq!(
            reply,
            "Cześć Greg! Tu Twój Mózg. Streaming działa, most jest drożny. Czekam na Twoje instrukcje w Pythonie."
        );
    }

    #[test]
    fn test_empty_attention_map_matches_plain_reply() {
        let plain = CannedReply.compose(&ChatRequest::default()).unwrap();
        let empty = CannedReply.compose(&request_with(&[])).unwrap();
        assert_eq!(plain, empty);
    }

    #[test]
    fn test_categories_in_input_order() {
        let reply = CannedReply.compose(&request_with(&["A", "B"])).unwrap();
        assert!(reply.contains("Skupiam uwagę na Twoich kategoriach: A, B."));
        assert!(reply.starts_with(GREETING));
        assert!(reply.ends_with(CLOSING));

        let reversed = CannedReply.compose(&request_with(&["B", "A"])).unwrap();
        assert!(reversed.contains("kategoriach: B, A."));
    }

    #[test]
    fn test_deterministic() {
        let request = request_with(&["Praca", "Zdrowie"]);
        assert_eq!(
            CannedReply.compose(&request).unwrap(),
            CannedReply.compose(&request).unwrap()
        );
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut request = request_with(&["A"]);
        request
            .attention_map
            .as_mut()
            .unwrap()
            .push(AttentionCategory::default());
        assert!(matches!(
            CannedReply.compose(&request),
            Err(AppError::MissingField { index: 1, .. })
        ));
    }
}
