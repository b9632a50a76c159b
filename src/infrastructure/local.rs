// src/infrastructure/local.rs
use crate::application::NoteRepository;
use crate::constants::{NOTES_KEY, TAGS_KEY};
use crate::domain::{mutation, DomainError, Note, NoteData, NoteView, RawNote, Tag};
use crate::infrastructure::persisted::PersistedState;
use crate::infrastructure::storage::Storage;
use anyhow::Result;
use tracing::{debug, info, instrument};

fn storage_error(err: anyhow::Error) -> DomainError {
    DomainError::StorageError(format!("{err:#}"))
}

/// Notes and tags kept in two persisted slots of one storage backend.
pub struct LocalNoteRepository<S: Storage> {
    notes: PersistedState<Vec<RawNote>, S>,
    tags: PersistedState<Vec<Tag>, S>,
    view: NoteView,
}

impl<S: Storage + Clone> LocalNoteRepository<S> {
    /// Open using the default `NOTES` and `TAGS` keys
    pub fn open(storage: S) -> Result<Self> {
        Self::open_with_keys(storage, NOTES_KEY, TAGS_KEY)
    }

    pub fn open_with_keys(storage: S, notes_key: &str, tags_key: &str) -> Result<Self> {
        let notes = PersistedState::load(storage.clone(), notes_key, Vec::new())?;
        let tags = PersistedState::load(storage, tags_key, Vec::new())?;
        info!(
            notes = notes.value().len(),
            tags = tags.value().len(),
            "Opened note store"
        );
        Ok(Self {
            notes,
            tags,
            view: NoteView::new(),
        })
    }
}

impl<S: Storage> LocalNoteRepository<S> {
    pub fn raw_notes(&self) -> &[RawNote] {
        self.notes.value()
    }

    fn notes_with_tags(&mut self) -> &[Note] {
        self.view.get(
            self.notes.value(),
            self.notes.revision(),
            self.tags.value(),
            self.tags.revision(),
        )
    }

    fn ensure_note(&self, id: &str) -> Result<(), DomainError> {
        if self.notes.value().iter().any(|n| n.id == id) {
            Ok(())
        } else {
            debug!(note_id = id, "Note not found");
            Err(DomainError::NoteNotFound(id.to_string()))
        }
    }

    fn ensure_tag(&self, id: &str) -> Result<(), DomainError> {
        if self.tags.value().iter().any(|t| t.id == id) {
            Ok(())
        } else {
            debug!(tag_id = id, "Tag not found");
            Err(DomainError::TagNotFound(id.to_string()))
        }
    }
}

impl<S: Storage> NoteRepository for LocalNoteRepository<S> {
    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.notes_with_tags()
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes_with_tags().to_vec())
    }

    #[instrument(level = "debug", skip(self, data))]
    fn create_note(&mut self, data: NoteData) -> Result<Note, DomainError> {
        let (next, created) = mutation::create_note(self.notes.value(), data);
        self.notes.set(next).map_err(storage_error)?;
        Ok(created.resolve(self.tags.value()))
    }

    #[instrument(level = "debug", skip(self, data))]
    fn update_note(&mut self, id: &str, data: NoteData) -> Result<Note, DomainError> {
        self.ensure_note(id)?;
        self.notes
            .update(|prev| mutation::update_note(prev, id, &data))
            .map_err(storage_error)?;
        self.get_note(id)
    }

    #[instrument(level = "debug", skip(self, markdown))]
    fn update_note_content(
        &mut self,
        id: &str,
        title: &str,
        markdown: &str,
    ) -> Result<Note, DomainError> {
        self.ensure_note(id)?;
        self.notes
            .update(|prev| mutation::update_note_content(prev, id, title, markdown))
            .map_err(storage_error)?;
        self.get_note(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        self.ensure_note(id)?;
        self.notes
            .update(|prev| mutation::delete_note(prev, id))
            .map_err(storage_error)?;
        info!(note_id = id, "Deleted note");
        Ok(())
    }

    fn list_tags(&mut self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.value().clone())
    }

    #[instrument(level = "debug", skip(self))]
    fn add_tag(&mut self, tag: Tag) -> Result<Tag, DomainError> {
        self.tags
            .update(|prev| mutation::add_tag(prev, tag.clone()))
            .map_err(storage_error)?;
        Ok(tag)
    }

    #[instrument(level = "debug", skip(self))]
    fn update_tag(&mut self, id: &str, label: &str) -> Result<Tag, DomainError> {
        self.ensure_tag(id)?;
        self.tags
            .update(|prev| mutation::rename_tag(prev, id, label))
            .map_err(storage_error)?;
        Ok(Tag {
            id: id.to_string(),
            label: label.to_string(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_tag(&mut self, id: &str) -> Result<(), DomainError> {
        self.ensure_tag(id)?;
        self.tags
            .update(|prev| mutation::delete_tag(prev, id))
            .map_err(storage_error)
    }
}
