use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StorageError;

use super::{StoragePort, check_quota, usage};

const STORAGE_FILE: &str = "storage.json";

/// Storage kept in a single JSON object file, one member per key.
///
/// Every write rewrites the whole file through a temporary file in the same
/// directory, so a reader sees either the old or the new contents.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    quota: Option<u64>,
}

impl FileStorage {
    /// Open the store in `dir`. A missing file is an empty store.
    pub fn open(dir: &Path, quota: Option<u64>) -> Result<Self, StorageError> {
        let path = dir.join(STORAGE_FILE);

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                StorageError::Corrupt(format!("{}: {}", path.display(), e))
            })?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), entries = entries.len(), "opened storage");

        Ok(FileStorage {
            path,
            entries,
            quota,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| StorageError::Corrupt("storage path has no parent".into()))?;
        std::fs::create_dir_all(dir)?;

        let content = serde_json::to_string(entries)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}

impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(
            usage(self.entries.iter()),
            self.entries.get(key),
            key,
            value,
            self.quota,
        )?;

        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.write(&next)?;
        self.entries = next;

        tracing::debug!(key, bytes = value.len(), "wrote storage entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path(), None).unwrap();
        assert!(storage.is_empty());
        assert_eq!(storage.get("event:x").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut storage = FileStorage::open(dir.path(), None).unwrap();
        storage.put("event:1", "{\"a\":1}").unwrap();
        storage.put("event:2", "two").unwrap();
        drop(storage);

        let storage = FileStorage::open(dir.path(), None).unwrap();
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.get("event:1").unwrap().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");

        let mut storage = FileStorage::open(&nested, None).unwrap();
        storage.put("k", "v").unwrap();
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(STORAGE_FILE), "not json").unwrap();

        let err = FileStorage::open(dir.path(), None).unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[test]
    fn quota_failure_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path(), Some(16)).unwrap();
        storage.put("k", "small").unwrap();

        assert!(storage.put("k2", "far too large for this").is_err());

        let reopened = FileStorage::open(dir.path(), Some(16)).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get("k2").unwrap(), None);
    }
}
