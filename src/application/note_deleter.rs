// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::DomainError;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return its title
    pub fn delete_note(&mut self, note_id: &str) -> Result<String, DomainError> {
        let note = self.repository.get_note(note_id)?;
        self.repository.delete_note(note_id)?;
        Ok(note.title)
    }
}
