// src/constants.rs
//
// Application-wide constants.

/// Storage key holding the array of persisted notes.
pub const NOTES_KEY: &str = "NOTES";

/// Storage key holding the array of tags.
pub const TAGS_KEY: &str = "TAGS";

/// Directory name under the platform config and data directories.
pub const APP_DIR_NAME: &str = "marknote";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Maximum characters of markdown shown next to a note in list output.
///
/// Used in: `ports/console.rs`
pub const PREVIEW_MAX_CHARS: usize = 60;

/// Delay in milliseconds after writing the HTML file before returning.
///
/// The temp directory is removed when the renderer drops, so the browser needs
/// a moment to read the file first.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;
