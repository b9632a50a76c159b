// src/application/repository.rs
use crate::domain::{DomainError, Note, NoteData, Tag};

/// Note and tag collections as seen by the use cases.
///
/// Notes are returned in their view form, with tag references resolved.
pub trait NoteRepository {
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError>;

    /// All notes in insertion order
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    fn create_note(&mut self, data: NoteData) -> Result<Note, DomainError>;

    /// Replace title, markdown and tags of an existing note
    fn update_note(&mut self, id: &str, data: NoteData) -> Result<Note, DomainError>;

    /// Replace title and markdown, leaving stored tag references untouched
    fn update_note_content(
        &mut self,
        id: &str,
        title: &str,
        markdown: &str,
    ) -> Result<Note, DomainError>;

    fn delete_note(&mut self, id: &str) -> Result<(), DomainError>;

    fn list_tags(&mut self) -> Result<Vec<Tag>, DomainError>;

    fn add_tag(&mut self, tag: Tag) -> Result<Tag, DomainError>;

    fn update_tag(&mut self, id: &str, label: &str) -> Result<Tag, DomainError>;

    /// Remove a tag. Notes keep their reference and simply stop showing it.
    fn delete_tag(&mut self, id: &str) -> Result<(), DomainError>;
}
