// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Tag not found: {0}")]
    TagNotFound(String),
    #[error("Storage error: {0}")]
    StorageError(String),
}
