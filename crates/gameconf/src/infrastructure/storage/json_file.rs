//! JSON settings file in the platform config directory.
//!
//! The file name depends on the build flavor:
//! - Windows:  `%APPDATA%\gameconf\config.json`
//! - Linux:    `~/.config/gameconf/config.json`
//! - macOS:    `~/Library/Application Support/gameconf/config.json`
//!
//! Debug builds use `config_d.json` in the same directory so a development
//! build never clobbers the settings of an installed release.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gameconf_core::BuildFlavor;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{SettingsRepository, StorageError};

/// Name of the per-application directory under the platform config base.
const APP_DIR: &str = "gameconf";

/// Resolves the settings file path for `flavor`.
///
/// # Errors
///
/// Returns [`StorageError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn settings_file_path(flavor: BuildFlavor) -> Result<PathBuf, StorageError> {
    let dir = platform_config_dir().ok_or(StorageError::NoPlatformConfigDir)?;
    Ok(dir.join(flavor.file_name()))
}

/// A settings file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling temp file, unique per write so concurrent processes never share one.
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "settings".to_string());
        self.path
            .with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()))
    }
}

impl SettingsRepository for JsonFileRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let temp = self.temp_path();
        fs::write(&temp, contents).map_err(|source| StorageError::Io {
            path: temp.clone(),
            source,
        })?;

        if let Err(source) = fs::rename(&temp, &self.path) {
            if let Err(e) = fs::remove_file(&temp) {
                warn!(path = %temp.display(), error = %e, "failed to remove temp settings file");
            }
            return Err(StorageError::Io {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), bytes = contents.len(), "settings file replaced");
        Ok(())
    }
}

/// Resolves the platform config directory including the `gameconf` subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join(APP_DIR))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join(APP_DIR))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gameconf_test_{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_read_returns_none_when_file_absent() {
        let repo = JsonFileRepository::new("/nonexistent/path/that/cannot/exist/config.json");
        assert!(matches!(repo.read(), Ok(None)));
    }

    #[test]
    fn test_write_then_read_returns_same_text() {
        // Arrange
        let dir = temp_dir();
        let repo = JsonFileRepository::new(dir.join("config.json"));

        // Act
        repo.write("{\"lang\": \"en\"}").expect("write");
        let read = repo.read().expect("read");

        // Assert
        assert_eq!(read.as_deref(), Some("{\"lang\": \"en\"}"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_replaces_previous_contents_and_leaves_no_temp_files() {
        let dir = temp_dir();
        let repo = JsonFileRepository::new(dir.join("config.json"));

        repo.write("first, and considerably longer than the second").unwrap();
        repo.write("second").unwrap();

        assert_eq!(repo.read().unwrap().as_deref(), Some("second"));
        let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1, "only the settings file may remain");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_creates_missing_parent_directories() {
        let dir = temp_dir();
        let repo = JsonFileRepository::new(dir.join("nested").join("deeper").join("config.json"));

        repo.write("{}").expect("write into fresh directory");

        assert!(dir.join("nested").join("deeper").join("config.json").is_file());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_write_fails_when_parent_is_a_regular_file() {
        // Arrange: "blocker" is a file, so "blocker/config.json" cannot be created.
        let dir = temp_dir();
        fs::write(dir.join("blocker"), "x").unwrap();
        let repo = JsonFileRepository::new(dir.join("blocker").join("config.json"));

        // Act
        let result = repo.write("{}");

        // Assert
        assert!(matches!(result, Err(StorageError::Io { .. })));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_read_of_directory_is_an_io_error_not_absent() {
        let dir = temp_dir();
        let repo = JsonFileRepository::new(&dir);

        assert!(matches!(repo.read(), Err(StorageError::Io { .. })));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_settings_file_path_uses_flavor_file_name() {
        // May be NoPlatformConfigDir in a stripped environment; that is acceptable.
        if let Ok(path) = settings_file_path(BuildFlavor::Debug) {
            assert!(path.ends_with(Path::new(APP_DIR).join("config_d.json")), "got {path:?}");
        }
        if let Ok(path) = settings_file_path(BuildFlavor::Release) {
            assert!(path.ends_with("config.json"), "got {path:?}");
        }
    }
}
