//! Key-value storage backends.
//!
//! Records only need two operations from their backing store: read a value
//! by key and overwrite a value by key. Anything that can do that can hold
//! events, which keeps the lifecycle testable against an in-memory map.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Default quota, the common per-origin browser local storage limit.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Durable string key-value storage.
pub trait StoragePort {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing whatever was there.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: StoragePort + ?Sized> StoragePort for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}

/// Size a set of entries counts against a quota.
fn usage<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> u64 {
    entries.map(|(k, v)| (k.len() + v.len()) as u64).sum()
}

/// Check that replacing `key` with `value` keeps `current` usage within `quota`.
fn check_quota(
    current: u64,
    existing: Option<&String>,
    key: &str,
    value: &str,
    quota: Option<u64>,
) -> Result<(), StorageError> {
    let Some(quota) = quota else {
        return Ok(());
    };

    let freed = existing.map(|old| (key.len() + old.len()) as u64).unwrap_or(0);
    let needed = current - freed + (key.len() + value.len()) as u64;

    if needed > quota {
        return Err(StorageError::QuotaExceeded { needed, quota });
    }

    Ok(())
}
