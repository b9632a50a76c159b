// src/infrastructure/mod.rs
pub mod config;
pub mod local;
pub mod markdown;
pub mod persisted;
pub mod renderer;
pub mod storage;

pub use config::Config;
pub use local::LocalNoteRepository;
pub use persisted::PersistedState;
pub use storage::{FileStorage, MemoryStorage, Storage};
