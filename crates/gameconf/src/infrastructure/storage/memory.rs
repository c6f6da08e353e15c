//! In-memory settings repository for tests.
//!
//! Clones share state, so a test can hand one clone to the store and keep
//! another to inspect what was written or to make the next write fail.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{SettingsRepository, StorageError};

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    fail_writes: bool,
    write_count: u32,
}

/// A [`SettingsRepository`] backed by a shared in-memory string.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    location: PathBuf,
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryRepository {
    /// Creates an empty repository (as if no settings file exists).
    pub fn new() -> Self {
        Self {
            location: PathBuf::from("memory://settings.json"),
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    /// Creates a repository pre-populated with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let repo = Self::new();
        repo.state.lock().expect("lock poisoned").contents = Some(contents.into());
        repo
    }

    /// The last successfully written (or pre-populated) text.
    pub fn contents(&self) -> Option<String> {
        self.state.lock().expect("lock poisoned").contents.clone()
    }

    /// Replaces the stored text without counting it as a write.
    pub fn set_contents(&self, contents: Option<String>) {
        self.state.lock().expect("lock poisoned").contents = contents;
    }

    /// Makes every subsequent write fail until called again with `false`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().expect("lock poisoned").fail_writes = fail;
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> u32 {
        self.state.lock().expect("lock poisoned").write_count
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRepository for MemoryRepository {
    fn location(&self) -> &Path {
        &self.location
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.contents())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut state = self.state.lock().expect("lock poisoned");
        if state.fail_writes {
            return Err(StorageError::Io {
                path: self.location.clone(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "injected write failure"),
            });
        }
        state.contents = Some(contents.to_string());
        state.write_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_repository_reads_as_absent() {
        assert!(matches!(MemoryRepository::new().read(), Ok(None)));
    }

    #[test]
    fn test_clones_share_contents_and_write_count() {
        // Arrange
        let repo = MemoryRepository::new();
        let observer = repo.clone();

        // Act
        repo.write("{}").unwrap();

        // Assert
        assert_eq!(observer.contents().as_deref(), Some("{}"));
        assert_eq!(observer.write_count(), 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let repo = MemoryRepository::with_contents("old");
        repo.set_fail_writes(true);

        let result = repo.write("new");

        assert!(matches!(result, Err(StorageError::Io { .. })));
        assert_eq!(repo.contents().as_deref(), Some("old"));
        assert_eq!(repo.write_count(), 0);
    }
}
