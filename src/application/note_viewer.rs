// src/application/note_viewer.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_note(&mut self, note_id: &str) -> Result<Note, DomainError> {
        self.repository.get_note(note_id)
    }
}
