mod helpers;

use marknote::application::NoteViewer;
use marknote::domain::DomainError;
use marknote::ports::HtmlPresenter;
use anyhow::Result;
use helpers::{golden, TestStore};

#[test]
fn given_valid_note_id_when_viewing_note_then_returns_note_with_tags() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut viewer = NoteViewer::new(store.open_repository()?);

    // Act
    let note = viewer.view_note(golden::GROCERIES)?;

    // Assert
    assert_eq!(note.id, golden::GROCERIES);
    assert_eq!(note.title, "Groceries");
    // Order follows the tag collection, not the note's reference list
    let labels: Vec<&str> = note.tags.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["work", "home"]);
    Ok(())
}

#[test]
fn given_note_with_only_dangling_tag_when_viewing_then_has_no_tags() -> Result<()> {
    let store = TestStore::seeded()?;
    let mut viewer = NoteViewer::new(store.open_repository()?);

    let note = viewer.view_note(golden::ARCHIVE)?;

    assert!(note.tags.is_empty());
    Ok(())
}

#[test]
fn given_nonexistent_note_id_when_viewing_note_then_returns_not_found() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut viewer = NoteViewer::new(store.open_repository()?);

    // Act
    let result = viewer.view_note(golden::NONEXISTENT);

    // Assert
    match result {
        Err(DomainError::NoteNotFound(id)) => assert_eq!(id, golden::NONEXISTENT),
        other => panic!("Expected NoteNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn given_todo_note_when_viewing_and_rendering_then_produces_html_page() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut viewer = NoteViewer::new(store.open_repository()?);
    let presenter = HtmlPresenter::new();

    // Act
    let note = viewer.view_note(golden::TODO)?;
    let html = presenter.render(&note);

    // Assert
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Todo</h1>"));
    assert!(html.contains(">work</span>"));
    assert!(html.contains("checkbox"));
    Ok(())
}
