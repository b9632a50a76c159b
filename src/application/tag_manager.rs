// src/application/tag_manager.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Tag};
use tracing::info;

pub struct TagManager<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> TagManager<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn list_tags(&mut self) -> Result<Vec<Tag>, DomainError> {
        self.repository.list_tags()
    }

    pub fn add_tag(&mut self, label: &str) -> Result<Tag, DomainError> {
        let tag = self.repository.add_tag(Tag::new(label))?;
        info!(tag_id = %tag.id, label, "Added tag");
        Ok(tag)
    }

    pub fn rename_tag(&mut self, tag_id: &str, label: &str) -> Result<Tag, DomainError> {
        self.repository.update_tag(tag_id, label)
    }

    /// Delete a tag without touching the notes that reference it
    pub fn delete_tag(&mut self, tag_id: &str) -> Result<(), DomainError> {
        self.repository.delete_tag(tag_id)?;
        info!(tag_id, "Deleted tag");
        Ok(())
    }
}
