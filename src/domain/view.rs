// src/domain/view.rs
use crate::domain::{Note, RawNote, Tag};
use tracing::trace;

/// Join notes with the tags they reference.
pub fn resolve_notes(notes: &[RawNote], tags: &[Tag]) -> Vec<Note> {
    notes.iter().map(|note| note.resolve(tags)).collect()
}

/// Cached result of [`resolve_notes`].
///
/// Keyed by the revisions of the two inputs; recomputed only when either changes.
#[derive(Debug, Default)]
pub struct NoteView {
    key: Option<(u64, u64)>,
    notes: Vec<Note>,
}

impl NoteView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        notes: &[RawNote],
        notes_revision: u64,
        tags: &[Tag],
        tags_revision: u64,
    ) -> &[Note] {
        let key = (notes_revision, tags_revision);
        if self.key != Some(key) {
            trace!(notes_revision, tags_revision, "Recomputing note view");
            self.notes = resolve_notes(notes, tags);
            self.key = Some(key);
        }
        &self.notes
    }

    /// Drop the cached result so the next `get` recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
