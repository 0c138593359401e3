//! Event records on top of a key-value store.

use crate::error::{LoadError, PersistError};
use crate::event::EventRecord;
use crate::storage::StoragePort;

/// Prefix of every event key.
pub const KEY_PREFIX: &str = "event:";

/// Storage key for the event with `id`.
pub fn storage_key(id: &str) -> String {
    format!("{}{}", KEY_PREFIX, id)
}

/// Reads and writes whole event records as JSON.
#[derive(Debug)]
pub struct EventStore<S> {
    storage: S,
}

impl<S: StoragePort> EventStore<S> {
    pub fn new(storage: S) -> Self {
        EventStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write `record` under its key, replacing any previous value.
    pub fn put(&mut self, record: &EventRecord) -> Result<(), PersistError> {
        let json = serde_json::to_string(record)?;
        self.storage.put(&storage_key(&record.id), &json)?;
        tracing::debug!(id = %record.id, bytes = json.len(), "stored event");
        Ok(())
    }

    /// Load the record stored for `id`.
    pub fn get(&self, id: &str) -> Result<EventRecord, LoadError> {
        let raw = self
            .storage
            .get(&storage_key(id))?
            .ok_or_else(|| LoadError::NotFound(id.to_string()))?;

        serde_json::from_str(&raw).map_err(|source| LoadError::Unparseable {
            id: id.to_string(),
            source,
        })
    }

    /// Raw stored text for `id`, exactly as written.
    pub fn get_raw(&self, id: &str) -> Result<Option<String>, LoadError> {
        Ok(self.storage.get(&storage_key(id))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::MemoryStorage;
    use chrono::{DateTime, Utc};

    fn record(id: &str) -> EventRecord {
        EventRecord {
            id: id.into(),
            event_name: "Karaoke".into(),
            phone: "555-0000".into(),
            date_time: "2026-12-01T20:00".parse().unwrap(),
            location: "Bar".into(),
            cost: "5".into(),
            description: "Sing".into(),
            capacity: Some("30".into()),
            links: vec!["https://example.com".into()],
            image: Some("data:image/png;base64,iVBORw0KGgo=".into()),
            background_image: None,
            created_at: DateTime::parse_from_rfc3339("2026-10-16T10:00:00.500Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn key_is_prefixed_id() {
        assert_eq!(storage_key("abc"), "event:abc");
    }

    #[test]
    fn round_trip() {
        let mut store = EventStore::new(MemoryStorage::new());
        let original = record("r1");

        store.put(&original).unwrap();

        assert_eq!(store.get("r1").unwrap(), original);
        assert!(store.storage().keys().any(|k| k == "event:r1"));
    }

    #[test]
    fn round_trip_keeps_sub_second_times() {
        let mut store = EventStore::new(MemoryStorage::new());
        let mut original = record("r2");
        original.date_time = "2026-10-23T18:30:00.500".parse().unwrap();

        store.put(&original).unwrap();

        assert_eq!(store.get("r2").unwrap(), original);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = EventStore::new(MemoryStorage::new());
        assert!(matches!(store.get("nope"), Err(LoadError::NotFound(id)) if id == "nope"));
    }

    #[test]
    fn garbage_is_unparseable() {
        let mut storage = MemoryStorage::new();
        storage.put("event:bad", "{not json").unwrap();
        storage.put("event:wrong", r#"{"id": 3}"#).unwrap();
        let store = EventStore::new(storage);

        assert!(matches!(store.get("bad"), Err(LoadError::Unparseable { .. })));
        assert!(matches!(store.get("wrong"), Err(LoadError::Unparseable { .. })));
    }

    #[test]
    fn put_overwrites_whole_record() {
        let mut store = EventStore::new(MemoryStorage::new());
        let mut r = record("r1");
        store.put(&r).unwrap();

        r.capacity = None;
        r.links.clear();
        store.put(&r).unwrap();

        assert_eq!(store.get("r1").unwrap(), r);
    }

    #[test]
    fn storage_failure_surfaces_as_error() {
        let mut store = EventStore::new(MemoryStorage::with_quota(64));

        let err = store.put(&record("r1")).unwrap_err();

        assert!(matches!(
            err,
            PersistError::Storage(StorageError::QuotaExceeded { .. })
        ));
        assert!(store.storage().is_empty());
    }
}
