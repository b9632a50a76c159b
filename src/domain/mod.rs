// src/domain/mod.rs
pub mod error;
pub mod filter;
pub mod mutation;
pub mod note;
pub mod tag;
pub mod view;

pub use error::DomainError;
pub use filter::NoteFilter;
pub use note::{Note, NoteData, RawNote};
pub use tag::Tag;
pub use view::{resolve_notes, NoteView};
