// src/application/mod.rs
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;
pub mod repository;
pub mod tag_manager;

pub use note_deleter::NoteDeleter;
pub use note_editor::{NoteDraft, NoteEdit, NoteEditor};
pub use note_lister::NoteLister;
pub use note_viewer::NoteViewer;
pub use repository::NoteRepository;
pub use tag_manager::TagManager;
