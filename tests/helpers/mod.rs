use marknote::domain::{RawNote, Tag};
use marknote::infrastructure::{FileStorage, LocalNoteRepository, Storage};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary on-disk note store
#[allow(dead_code)]
pub struct TestStore {
    _temp_dir: TempDir,
    pub store_dir: PathBuf,
}

#[allow(dead_code)]
impl TestStore {
    /// Create an empty store in a fresh temp directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let store_dir = temp_dir.path().join("store");

        Ok(Self {
            _temp_dir: temp_dir,
            store_dir,
        })
    }

    /// Create a store pre-populated with the golden dataset
    pub fn seeded() -> Result<Self> {
        let store = Self::new()?;
        let mut storage = store.storage();
        storage.set_item("NOTES", &serde_json::to_string(&golden::notes())?)?;
        storage.set_item("TAGS", &serde_json::to_string(&golden::tags())?)?;
        Ok(store)
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.store_dir)
    }

    /// Open repository for this store
    pub fn open_repository(&self) -> Result<LocalNoteRepository<FileStorage>> {
        LocalNoteRepository::open(self.storage())
    }

    /// Raw JSON currently stored under `key`
    pub fn stored_json(&self, key: &str) -> Result<serde_json::Value> {
        let text = self
            .storage()
            .get_item(key)?
            .context("Key not present in store")?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Known notes and tags in the seeded store
#[allow(dead_code)]
pub mod golden {
    use super::*;

    pub const TODO: &str = "1";
    pub const GROCERIES: &str = "2";
    pub const ARCHIVE: &str = "3";

    pub const WORK: &str = "a";
    pub const HOME: &str = "b";

    pub const NONEXISTENT: &str = "does-not-exist";

    pub fn tags() -> Vec<Tag> {
        vec![
            Tag { id: WORK.to_string(), label: "work".to_string() },
            Tag { id: HOME.to_string(), label: "home".to_string() },
        ]
    }

    pub fn notes() -> Vec<RawNote> {
        vec![
            RawNote {
                id: TODO.to_string(),
                title: "Todo".to_string(),
                markdown: "- [ ] ship it".to_string(),
                tag_ids: vec![WORK.to_string()],
            },
            RawNote {
                id: GROCERIES.to_string(),
                title: "Groceries".to_string(),
                markdown: "milk, eggs".to_string(),
                tag_ids: vec![HOME.to_string(), WORK.to_string()],
            },
            RawNote {
                id: ARCHIVE.to_string(),
                title: "Old todo list".to_string(),
                markdown: String::new(),
                tag_ids: vec!["deleted-long-ago".to_string()],
            },
        ]
    }
}
