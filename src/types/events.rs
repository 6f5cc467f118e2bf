use serde::Serialize;

/// One streamed fragment: a token plus its trailing space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamEvent {
    pub content: String,
}

impl StreamEvent {
    pub fn token(word: &str) -> Self {
        Self {
            content: format!("{} ", word),
        }
    }

    pub fn to_sse_data(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// How a producer task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    Completed { sent: usize },
    Cancelled { sent: usize },
}

impl StreamOutcome {
    pub fn sent(&self) -> usize {
        match self {
            Self::Completed { sent } | Self::Cancelled { sent } => *sent,
        }
    }
}
