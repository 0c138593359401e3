//! State of the event page.

use thiserror::Error;

use crate::error::LoadError;
use crate::event::EventRecord;
use crate::link::{LinkOpener, go_to_external_link};
use crate::storage::StoragePort;
use crate::store::EventStore;

/// Why an event page has nothing to show.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("Invalid event id")]
    MissingId,

    #[error("Event not found")]
    NotFound,

    #[error("Failed to load event")]
    LoadFailed,
}

/// A loaded record and which optional sections it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventView {
    pub record: EventRecord,
    pub show_capacity: bool,
    pub show_links: bool,
}

impl EventView {
    pub fn new(record: EventRecord) -> Self {
        let show_capacity = !record.capacity_text().is_empty();
        let show_links = !record.links.is_empty();

        EventView {
            record,
            show_capacity,
            show_links,
        }
    }

    /// Open the link at `index` (0-based). Returns the URL that was opened.
    pub fn open_link(&self, index: usize, opener: &dyn LinkOpener) -> Option<String> {
        let link = self.record.links.get(index)?;
        go_to_external_link(link, opener)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(ViewError),
    Loaded(Box<EventView>),
}

/// Load the record for `id` into a view state.
pub fn hydrate<S: StoragePort>(store: &EventStore<S>, id: Option<&str>) -> ViewState {
    let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
        return ViewState::Error(ViewError::MissingId);
    };

    match store.get(id) {
        Ok(record) => ViewState::Loaded(Box::new(EventView::new(record))),
        Err(LoadError::NotFound(_)) => {
            tracing::debug!(id, "event not found");
            ViewState::Error(ViewError::NotFound)
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "failed to load event");
            ViewState::Error(ViewError::LoadFailed)
        }
    }
}

/// The event page, from entry to a settled state.
#[derive(Debug, Clone)]
pub struct Viewer {
    state: ViewState,
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer {
            state: ViewState::Loading,
        }
    }
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    pub fn load<S: StoragePort>(&mut self, store: &EventStore<S>, id: Option<&str>) -> &ViewState {
        self.state = hydrate(store, id);
        &self.state
    }
}
