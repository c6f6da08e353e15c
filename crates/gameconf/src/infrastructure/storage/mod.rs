//! Storage infrastructure: settings file persistence.
//!
//! The store never touches the file system directly.  It talks to a
//! [`SettingsRepository`], which knows how to read the whole settings text
//! and how to replace it in one step:
//!
//! - [`json_file::JsonFileRepository`] – the real settings file under the
//!   platform config directory, written via temp file + rename so a crash
//!   mid-write never leaves a truncated document behind.
//! - [`memory::MemoryRepository`] – an in-memory stand-in for tests, with
//!   optional write-failure injection.

pub mod json_file;
pub mod memory;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use json_file::{settings_file_path, JsonFileRepository};
pub use memory::MemoryRepository;

/// Error type for settings storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-document access to the persisted settings.
pub trait SettingsRepository: Send {
    /// Where the settings live, for log output and the `show` command.
    fn location(&self) -> &Path;

    /// Reads the whole settings text.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for any failure other than "not found".
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replaces the persisted settings with `contents`.
    ///
    /// Either the whole document is replaced or, on error, the previous
    /// document is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the destination cannot be written.
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}
