// src/domain/tag.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A label attachable to notes, identified independently of its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

impl Tag {
    /// Create a tag with a freshly generated id
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            label: label.into(),
        }
    }
}
