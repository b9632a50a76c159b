// src/infrastructure/persisted.rs
use crate::infrastructure::storage::Storage;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// A value held in memory and mirrored as JSON under one storage key.
///
/// Reads the key once on load, falling back to `initial` when absent.
/// Every `set`/`update` writes the new value through before it becomes visible.
#[derive(Debug)]
pub struct PersistedState<T, S> {
    storage: S,
    key: String,
    value: T,
    revision: u64,
}

impl<T, S> PersistedState<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Storage,
{
    #[instrument(level = "debug", skip(storage, initial))]
    pub fn load(storage: S, key: &str, initial: T) -> Result<Self> {
        let value = match storage.get_item(key)? {
            Some(json) => serde_json::from_str(&json)
                .with_context(|| format!("Stored value for key `{key}` is not valid"))?,
            None => {
                debug!(key, "Key not present, using initial value");
                initial
            }
        };

        Ok(Self {
            storage,
            key: key.to_string(),
            value,
            revision: 0,
        })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Incremented on every successful write.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, value: T) -> Result<()> {
        let json = serde_json::to_string(&value)
            .with_context(|| format!("Failed to serialize value for key `{}`", self.key))?;
        self.storage.set_item(&self.key, &json)?;

        self.value = value;
        self.revision += 1;
        debug!(key = %self.key, revision = self.revision, "Persisted state");
        Ok(())
    }

    /// Read-modify-write against the current value.
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&T) -> T,
    {
        let next = f(&self.value);
        self.set(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;

    #[test]
    fn given_empty_storage_when_loading_then_uses_initial_without_writing() {
        let storage = MemoryStorage::new();

        let state: PersistedState<Vec<u32>, _> =
            PersistedState::load(storage.clone(), "NUMS", vec![7]).unwrap();

        assert_eq!(state.value(), &vec![7]);
        assert_eq!(state.revision(), 0);
        assert_eq!(storage.get_item("NUMS").unwrap(), None);
    }

    #[test]
    fn given_stored_value_when_loading_then_ignores_initial() {
        let mut storage = MemoryStorage::new();
        storage.set_item("NUMS", "[1,2,3]").unwrap();

        let state: PersistedState<Vec<u32>, _> =
            PersistedState::load(storage, "NUMS", vec![]).unwrap();

        assert_eq!(state.value(), &vec![1, 2, 3]);
    }

    #[test]
    fn given_set_when_reloading_then_sees_new_value() {
        let storage = MemoryStorage::new();
        let mut state = PersistedState::load(storage.clone(), "NUMS", vec![1u32]).unwrap();

        state.set(vec![4, 5]).unwrap();
        let reloaded: PersistedState<Vec<u32>, _> =
            PersistedState::load(storage, "NUMS", vec![]).unwrap();

        assert_eq!(reloaded.value(), &vec![4, 5]);
        assert_eq!(state.revision(), 1);
    }

    #[test]
    fn given_update_fn_when_applied_then_receives_previous_value() {
        let storage = MemoryStorage::new();
        let mut state = PersistedState::load(storage.clone(), "NUMS", vec![1u32]).unwrap();

        state.update(|prev| prev.iter().map(|n| n * 10).collect()).unwrap();
        state
            .update(|prev| {
                let mut next = prev.clone();
                next.push(2);
                next
            })
            .unwrap();

        assert_eq!(state.value(), &vec![10, 2]);
        assert_eq!(state.revision(), 2);
        assert_eq!(storage.get_item("NUMS").unwrap().as_deref(), Some("[10,2]"));
    }

    #[test]
    fn given_malformed_json_when_loading_then_returns_error_naming_key() {
        let mut storage = MemoryStorage::new();
        storage.set_item("NUMS", "{not json").unwrap();

        let result: Result<PersistedState<Vec<u32>, _>> =
            PersistedState::load(storage, "NUMS", vec![]);

        let err = result.expect_err("Malformed value should fail");
        assert!(format!("{err:#}").contains("NUMS"));
    }
}
