//! File-backed repositories.
//!
//! Each collection lives in `<root>/<key>.json`; settings live in
//! `<root>/settings.toml`. Every write goes through [`atomic::write_atomic`].

use std::path::{Path, PathBuf};

use crate::repository::StorageError;

mod atomic;
mod collection_repo;
mod settings_repo;

pub use atomic::write_atomic;

const COLLECTION_EXTENSION: &str = "json";
const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
}

impl FileRepository {
    /// Use `root` as the storage directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing the collection stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` for empty keys or keys that would
    /// escape the storage directory.
    pub fn collection_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{COLLECTION_EXTENSION}")))
    }

    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let invalid = key.trim().is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.chars().any(char::is_control);
    if invalid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

/// Read a whole file, mapping "does not exist" to `Ok(None)`.
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, StorageError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_path_uses_json_extension() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        assert_eq!(
            repo.collection_path("QuestionGroupData").unwrap(),
            dir.path().join("QuestionGroupData.json")
        );
    }

    #[test]
    fn rejects_keys_outside_root() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileRepository::open(dir.path()).unwrap();
        for key in ["", "  ", "../escape", "a/b", "a\\b", ".hidden"] {
            assert!(
                matches!(repo.collection_path(key), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn open_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let repo = FileRepository::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(repo.root(), nested.as_path());
    }
}
