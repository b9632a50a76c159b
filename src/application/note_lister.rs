// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteFilter};
use tracing::debug;

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List notes passing `filter`, in insertion order
    pub fn list_notes(&mut self, filter: &NoteFilter) -> Result<Vec<Note>, DomainError> {
        let notes = self.repository.list_notes()?;
        Ok(filter.apply(&notes))
    }

    /// List notes by title substring and tag labels
    ///
    /// A label naming no tag matches no note.
    pub fn list_notes_by_labels(
        &mut self,
        title: Option<&str>,
        labels: &[String],
    ) -> Result<Vec<Note>, DomainError> {
        let tags = self.repository.list_tags()?;
        let mut filter = NoteFilter {
            title: title.map(str::to_string),
            tag_ids: Vec::with_capacity(labels.len()),
        };

        for label in labels {
            match tags.iter().find(|t| &t.label == label) {
                Some(tag) => filter.tag_ids.push(tag.id.clone()),
                None => {
                    debug!(%label, "Unknown tag label in filter");
                    return Ok(vec![]);
                }
            }
        }

        self.list_notes(&filter)
    }
}
