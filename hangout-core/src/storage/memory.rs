use std::collections::HashMap;

use crate::error::StorageError;

use super::{StoragePort, check_quota, usage};

/// Storage held in a map. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<u64>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that refuses writes once keys plus values exceed `bytes`.
    pub fn with_quota(bytes: u64) -> Self {
        MemoryStorage {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl StoragePort for MemoryStorage {
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
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get() {
        let mut storage = MemoryStorage::new();
        storage.put("a", "1").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap(), None);
    }

    #[test]
    fn put_overwrites() {
        let mut storage = MemoryStorage::new();
        storage.put("a", "first").unwrap();
        storage.put("a", "second").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("second"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn quota_rejects_without_writing() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.put("k", "1234").unwrap();

        let err = storage.put("big", "0123456789").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { quota: 10, .. }));
        assert_eq!(storage.get("big").unwrap(), None);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn quota_credits_the_value_being_replaced() {
        let mut storage = MemoryStorage::with_quota(10);
        storage.put("k", "123456789").unwrap();
        storage.put("k", "987654321").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("987654321"));
    }
}
