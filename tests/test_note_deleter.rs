mod helpers;

use marknote::application::{NoteDeleter, NoteRepository};
use marknote::domain::DomainError;
use anyhow::Result;
use helpers::{golden, TestStore};

#[test]
fn given_existing_note_when_deleting_then_removes_note_from_store() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut deleter = NoteDeleter::new(store.open_repository()?);

    // Act
    let title = deleter.delete_note(golden::TODO)?;

    // Assert
    assert_eq!(title, "Todo");
    let mut reopened = store.open_repository()?;
    let ids: Vec<String> = reopened.list_notes()?.into_iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![golden::GROCERIES, golden::ARCHIVE]);
    Ok(())
}

#[test]
fn given_nonexistent_note_when_deleting_then_returns_not_found_error() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut deleter = NoteDeleter::new(store.open_repository()?);

    // Act
    let result = deleter.delete_note(golden::NONEXISTENT);

    // Assert
    match result.unwrap_err() {
        DomainError::NoteNotFound(id) => assert_eq!(id, golden::NONEXISTENT),
        _ => panic!("Expected NoteNotFound error"),
    }
    assert_eq!(store.open_repository()?.list_notes()?.len(), 3);
    Ok(())
}

#[test]
fn given_deleted_note_when_deleting_again_then_returns_not_found() -> Result<()> {
    let store = TestStore::seeded()?;
    let mut deleter = NoteDeleter::new(store.open_repository()?);

    deleter.delete_note(golden::GROCERIES)?;
    let result = deleter.delete_note(golden::GROCERIES);

    assert!(matches!(result, Err(DomainError::NoteNotFound(_))));
    Ok(())
}
