// src/domain/note.rs
use crate::domain::Tag;
use serde::{Deserialize, Serialize};

/// Persisted form of a note. Tags are referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNote {
    pub id: String,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<String>,
}

/// View form of a note with its tag references resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

/// Submitted content of a create or update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl RawNote {
    /// Resolve tag references against `tags`.
    ///
    /// The result follows the order of `tags`. Ids with no matching tag are dropped.
    pub fn resolve(&self, tags: &[Tag]) -> Note {
        Note {
            id: self.id.clone(),
            title: self.title.clone(),
            markdown: self.markdown.clone(),
            tags: tags
                .iter()
                .filter(|tag| self.tag_ids.contains(&tag.id))
                .cloned()
                .collect(),
        }
    }
}

impl Note {
    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tags.iter().any(|t| t.id == tag_id)
    }
}

impl From<&Note> for NoteData {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            markdown: note.markdown.clone(),
            tags: note.tags.clone(),
        }
    }
}
