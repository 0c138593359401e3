//! Core types for hangout.
//!
//! This crate owns the event record lifecycle shared by every front end:
//! - `draft` and `editor` for collecting and validating event details
//! - `store` and `storage` for persisting records under `event:<id>` keys
//! - `view` for loading a record back into a render state
//! - `link` and `image` for the two bits of input the pages accept besides text

pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod event;
pub mod hangout;
pub mod id;
pub mod image;
pub mod link;
pub mod route;
pub mod storage;
pub mod store;
pub mod view;

pub use draft::{EventDraft, Field};
pub use editor::{Editor, EditorError};
pub use error::{HangoutError, HangoutResult};
pub use event::{EventRecord, EventTime};
pub use hangout::Hangout;
pub use route::Route;
pub use store::EventStore;
pub use view::{EventView, ViewError, ViewState, Viewer};
