use crate::types::errors::AppError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of `POST /chat`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Prior conversation turns. Not inspected yet.
    #[serde(default)]
    pub messages: Vec<Map<String, Value>>,
    #[serde(default)]
    pub attention_map: Option<Vec<AttentionCategory>>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttentionCategory {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttentionCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            extra: Map::new(),
        }
    }
}

impl ChatRequest {
    /// Parse a raw body. The content type is not checked.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| AppError::MalformedRequest(e.to_string()))
    }

    pub fn categories(&self) -> &[AttentionCategory] {
        self.attention_map.as_deref().unwrap_or_default()
    }

    /// Category names in input order. Fails on the first entry without a usable name.
    pub fn category_names(&self) -> Result<Vec<&str>, AppError> {
        self.categories()
            .iter()
            .enumerate()
            .map(|(index, category)| match category.name.as_deref() {
                Some(name) if !name.is_empty() => Ok(name),
                _ => Err(AppError::MissingField {
                    index,
                    field: "name",
                }),
            })
            .collect()
    }
}
