mod helpers;

use marknote::application::NoteRepository;
use marknote::ports::HtmlPresenter;
use anyhow::Result;
use helpers::{golden, TestStore};

#[test]
fn given_note_with_two_tags_when_rendering_then_shows_both_badges() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut repo = store.open_repository()?;
    let note = repo.get_note(golden::GROCERIES)?;
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render(&note);

    // Assert
    assert!(html.contains(r#"data-tag-id="a">work</span>"#));
    assert!(html.contains(r#"data-tag-id="b">home</span>"#));
    assert!(html.contains("milk, eggs"));
    Ok(())
}

#[test]
fn given_note_without_markdown_when_rendering_then_body_is_empty() -> Result<()> {
    // Arrange
    let store = TestStore::seeded()?;
    let mut repo = store.open_repository()?;
    let note = repo.get_note(golden::ARCHIVE)?;

    // Act
    let html = HtmlPresenter::new().render(&note);

    // Assert
    assert!(html.contains(r#"<div class="note-body"></div>"#));
    assert!(!html.contains(r#"<div class="tags">"#));
    Ok(())
}
