//! State of the creation page.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, SubsecRound, Utc};
use thiserror::Error;

use crate::draft::{EventDraft, Field};
use crate::error::{ImageError, ValidationError};
use crate::event::EventRecord;
use crate::id::generate_id;
use crate::image::{ImageSlot, read_as_data_url};
use crate::route::Route;
use crate::storage::StoragePort;
use crate::store::EventStore;

/// What the creation page shows in its error area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage refused the record. The cause is logged, not shown.
    #[error("Unexpected error occurred")]
    Unexpected,
}

/// A draft plus the store it will be written to.
pub struct Editor<S> {
    draft: EventDraft,
    store: EventStore<S>,
    error: Option<EditorError>,
    loading: bool,
}

impl<S: StoragePort> Editor<S> {
    pub fn new(store: EventStore<S>) -> Self {
        Editor {
            draft: EventDraft::new(),
            store,
            error: None,
            loading: false,
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn into_store(self) -> EventStore<S> {
        self.store
    }

    /// The message currently on screen, if any.
    pub fn error(&self) -> Option<&EditorError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) -> Result<(), EditorError> {
        self.update_on(field, value, Local::now().date_naive())
    }

    pub fn update_on(
        &mut self,
        field: Field,
        value: impl Into<String>,
        today: NaiveDate,
    ) -> Result<(), EditorError> {
        self.draft
            .update_on(field, value, today)
            .map_err(|e| self.fail(e.into()))
    }

    pub fn enable_capacity(&mut self) {
        self.draft.enable_capacity();
    }

    pub fn enable_links(&mut self) {
        self.draft.enable_links();
    }

    pub fn add_link(&mut self) {
        self.draft.add_link();
    }

    pub fn update_link(&mut self, index: usize, value: impl Into<String>) {
        self.draft.update_link(index, value);
    }

    pub fn set_image(&mut self, slot: ImageSlot, data_url: Option<String>) {
        self.draft.set_image(slot, data_url);
    }

    /// Read `path` and put it in `slot`. A failed read leaves the slot as is.
    pub async fn load_image(&mut self, slot: ImageSlot, path: &Path) -> Result<(), ImageError> {
        let data_url = read_as_data_url(path).await?;
        self.draft.set_image(slot, Some(data_url));
        Ok(())
    }

    /// Validate, assign an identifier, and persist the draft.
    ///
    /// On success the caller navigates to [`Route::Event`] for the returned
    /// record. On failure nothing is written and the error stays visible
    /// until the next failure replaces it or a later attempt succeeds.
    pub fn go_live(&mut self) -> Result<EventRecord, EditorError> {
        self.go_live_at(Utc::now())
    }

    pub fn go_live_at(&mut self, now: DateTime<Utc>) -> Result<EventRecord, EditorError> {
        if let Err(e) = self.draft.validate() {
            return Err(self.fail(e.into()));
        }

        let record = self
            .draft
            .to_record(generate_id(), now.round_subsecs(3))
            .map_err(|e| self.fail(e.into()))?;

        self.loading = true;
        self.error = None;
        let stored = self.store.put(&record);
        self.loading = false;

        match stored {
            Ok(()) => {
                tracing::info!(id = %record.id, route = %Route::event(&record.id), "event is live");
                Ok(record)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to store event");
                Err(self.fail(EditorError::Unexpected))
            }
        }
    }

    fn fail(&mut self, error: EditorError) -> EditorError {
        self.error = Some(error.clone());
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn editor_with(storage: MemoryStorage) -> Editor<MemoryStorage> {
        let mut editor = Editor::new(EventStore::new(storage));
        for (field, value) in [
            (Field::EventName, "Board Game Night"),
            (Field::Phone, "555-1234"),
            (Field::DateTime, "2026-10-23"),
            (Field::Location, "Cafe"),
            (Field::Cost, "10"),
            (Field::Description, "Bring a friend"),
        ] {
            editor.update_on(field, value, today()).unwrap();
        }
        editor
    }

    #[test]
    fn go_live_persists_and_clears_error() {
        let mut editor = editor_with(MemoryStorage::new());
        editor.update_on(Field::DateTime, "2020-01-01", today()).unwrap_err();
        assert!(editor.error().is_some());

        let record = editor.go_live().unwrap();

        assert!(editor.error().is_none());
        assert!(!editor.is_loading());
        assert_eq!(editor.store().get(&record.id).unwrap(), record);
    }

    #[test]
    fn missing_field_blocks_the_write() {
        let mut editor = editor_with(MemoryStorage::new());
        editor.update_on(Field::Location, "", today()).unwrap();

        let err = editor.go_live().unwrap_err();

        assert_eq!(err, EditorError::Validation(ValidationError::Missing(Field::Location)));
        assert_eq!(editor.error().map(|e| e.to_string()).as_deref(), Some("Location is required"));
        assert!(editor.store().storage().is_empty());
    }

    #[test]
    fn new_error_replaces_old() {
        let mut editor = Editor::new(EventStore::new(MemoryStorage::new()));
        editor.update_on(Field::DateTime, "2020-01-01", today()).unwrap_err();
        editor.go_live().unwrap_err();

        assert_eq!(
            editor.error(),
            Some(&EditorError::Validation(ValidationError::Missing(Field::EventName)))
        );
    }

    #[test]
    fn storage_failure_is_generic() {
        let mut editor = editor_with(MemoryStorage::with_quota(32));

        let err = editor.go_live().unwrap_err();

        assert_eq!(err, EditorError::Unexpected);
        assert_eq!(err.to_string(), "Unexpected error occurred");
        assert!(!editor.is_loading());
        assert!(editor.store().storage().is_empty());
    }

    #[test]
    fn created_at_has_millisecond_precision() {
        let mut editor = editor_with(MemoryStorage::new());
        let now = DateTime::parse_from_rfc3339("2026-10-16T09:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);

        let record = editor.go_live_at(now).unwrap();

        assert_eq!(record.created_at.to_rfc3339(), "2026-10-16T09:30:00.123+00:00");
    }

    #[test]
    fn each_success_gets_a_new_id() {
        let mut editor = editor_with(MemoryStorage::new());
        let first = editor.go_live().unwrap();
        let second = editor.go_live().unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(editor.store().storage().len(), 2);
    }

    #[tokio::test]
    async fn load_image_sets_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let mut editor = editor_with(MemoryStorage::new());
        editor.load_image(ImageSlot::Background, &path).await.unwrap();

        let record = editor.go_live().unwrap();
        assert_eq!(record.background_image.as_deref(), Some("data:image/gif;base64,R0lGODlh"));
        assert!(record.image.is_none());
    }
}
