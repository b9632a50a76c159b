// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, NoteData, Tag};
use tracing::{debug, info};

/// Content for a new note. Tags are named by label.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub markdown: String,
    pub tag_labels: Vec<String>,
}

/// Changes to an existing note. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NoteEdit {
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub tag_labels: Option<Vec<String>>,
}

/// Create and edit use case.
///
/// Tag labels are matched against existing tags exactly; a label with no
/// match creates a new tag before the note is written.
pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<Note, DomainError> {
        let tags = self.resolve_labels(&draft.tag_labels)?;
        let note = self.repository.create_note(NoteData {
            title: draft.title,
            markdown: draft.markdown,
            tags,
        })?;
        info!(note_id = %note.id, "Created note");
        Ok(note)
    }

    /// Apply an edit. Without new tag labels the stored tag references are
    /// left exactly as they are, dangling ids included.
    pub fn edit_note(&mut self, note_id: &str, edit: NoteEdit) -> Result<Note, DomainError> {
        let current = self.repository.get_note(note_id)?;
        let title = edit.title.unwrap_or(current.title);
        let markdown = edit.markdown.unwrap_or(current.markdown);

        let note = match edit.tag_labels {
            Some(labels) => {
                let tags = self.resolve_labels(&labels)?;
                self.repository.update_note(
                    note_id,
                    NoteData {
                        title,
                        markdown,
                        tags,
                    },
                )?
            }
            None => self
                .repository
                .update_note_content(note_id, &title, &markdown)?,
        };
        info!(note_id, "Updated note");
        Ok(note)
    }

    fn resolve_labels(&mut self, labels: &[String]) -> Result<Vec<Tag>, DomainError> {
        let mut known = self.repository.list_tags()?;
        let mut selected: Vec<Tag> = Vec::with_capacity(labels.len());

        for label in labels.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            if selected.iter().any(|t| t.label == label) {
                continue;
            }
            let tag = match known.iter().find(|t| t.label == label) {
                Some(tag) => tag.clone(),
                None => {
                    let tag = self.repository.add_tag(Tag::new(label))?;
                    debug!(tag_id = %tag.id, label, "Created tag inline");
                    known.push(tag.clone());
                    tag
                }
            };
            selected.push(tag);
        }

        Ok(selected)
    }
}
