// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{mutation, resolve_notes, DomainError, Note, NoteData, RawNote, Tag};

/// Shared in-memory repository for testing use cases that depend on NoteRepository
///
/// Holds raw notes and tags and derives the view form on every read, so it
/// behaves like the persisted repository without touching storage.
///
/// # Examples
///
/// ```
/// use marknote::util::testing::{raw_note, tag, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_tag(tag("a", "work"))
///     .with_note(raw_note("1", "Todo", &["a"]))
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Vec<RawNote>,
    tags: Vec<Tag>,
    failing_writes: bool,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Notes as stored, with their tag references unresolved
    pub fn raw_notes(&self) -> &[RawNote] {
        &self.notes
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.failing_writes {
            return Err(DomainError::StorageError("writes disabled".to_string()));
        }
        Ok(())
    }
}

impl NoteRepository for MockNoteRepository {
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .map(|n| n.resolve(&self.tags))
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(resolve_notes(&self.notes, &self.tags))
    }

    fn create_note(&mut self, data: NoteData) -> Result<Note, DomainError> {
        self.check_writable()?;
        let (notes, created) = mutation::create_note(&self.notes, data);
        self.notes = notes;
        Ok(created.resolve(&self.tags))
    }

    fn update_note(&mut self, id: &str, data: NoteData) -> Result<Note, DomainError> {
        self.get_note(id)?;
        self.check_writable()?;
        self.notes = mutation::update_note(&self.notes, id, &data);
        self.get_note(id)
    }

    fn update_note_content(
        &mut self,
        id: &str,
        title: &str,
        markdown: &str,
    ) -> Result<Note, DomainError> {
        self.get_note(id)?;
        self.check_writable()?;
        self.notes = mutation::update_note_content(&self.notes, id, title, markdown);
        self.get_note(id)
    }

    fn delete_note(&mut self, id: &str) -> Result<(), DomainError> {
        self.get_note(id)?;
        self.check_writable()?;
        self.notes = mutation::delete_note(&self.notes, id);
        Ok(())
    }

    fn list_tags(&mut self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.tags.clone())
    }

    fn add_tag(&mut self, tag: Tag) -> Result<Tag, DomainError> {
        self.check_writable()?;
        self.tags = mutation::add_tag(&self.tags, tag.clone());
        Ok(tag)
    }

    fn update_tag(&mut self, id: &str, label: &str) -> Result<Tag, DomainError> {
        if !self.tags.iter().any(|t| t.id == id) {
            return Err(DomainError::TagNotFound(id.to_string()));
        }
        self.check_writable()?;
        self.tags = mutation::rename_tag(&self.tags, id, label);
        Ok(tag(id, label))
    }

    fn delete_tag(&mut self, id: &str) -> Result<(), DomainError> {
        if !self.tags.iter().any(|t| t.id == id) {
            return Err(DomainError::TagNotFound(id.to_string()));
        }
        self.check_writable()?;
        self.tags = mutation::delete_tag(&self.tags, id);
        Ok(())
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<RawNote>,
    tags: Vec<Tag>,
    failing_writes: bool,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            tags: vec![],
            failing_writes: false,
        }
    }

    /// Add a stored note
    pub fn with_note(mut self, note: RawNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Add a stored tag
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Make every mutation fail with a storage error
    pub fn with_failing_writes(mut self) -> Self {
        self.failing_writes = true;
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            tags: self.tags,
            failing_writes: self.failing_writes,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn tag(id: &str, label: &str) -> Tag {
    Tag {
        id: id.to_string(),
        label: label.to_string(),
    }
}

pub fn raw_note(id: &str, title: &str, tag_ids: &[&str]) -> RawNote {
    RawNote {
        id: id.to_string(),
        title: title.to_string(),
        markdown: format!("# {title}"),
        tag_ids: tag_ids.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["pulldown_cmark"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
