// src/constants.rs
//
// Application-wide constants. Store key names live next to their typed keys in
// `application::state_store::keys`.

/// Directory name used under the platform data and config directories.
pub const APP_DIR_NAME: &str = "mdnotes";

/// Config file looked up under `<config_dir>/mdnotes/` when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Title given to freshly created notes, and shown for notes whose title is empty.
pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

/// Number of content characters shown in list rows before truncation.
pub const SNIPPET_LENGTH: usize = 40;

/// Extension of the per-key files written by `FileStore`.
pub const STORE_FILE_EXTENSION: &str = "json";

/// Delay in milliseconds after launching the browser before returning.
///
/// The preview file lives in a temporary directory owned by the process; the
/// browser needs a moment to read it before the process exits and the
/// directory is removed.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Prefix the sanitizer puts in front of every `id` in rendered notes, so note
/// content cannot collide with ids of the surrounding page. Footnote links are
/// written against the prefixed id.
pub const HTML_ID_PREFIX: &str = "user-content-";
