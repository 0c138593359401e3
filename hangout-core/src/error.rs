//! Error types for hangout.

use thiserror::Error;

use crate::draft::Field;

/// Errors that can occur outside the record lifecycle (setup, config, files).
#[derive(Error, Debug)]
pub enum HangoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for hangout operations.
pub type HangoutResult<T> = Result<T, HangoutError>;

/// A draft that cannot become a record yet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", missing_message(.0))]
    Missing(Field),

    #[error("Event Date must be sometime in the future")]
    DateInPast,

    #[error("Invalid date: \"{0}\"")]
    InvalidDate(String),
}

fn missing_message(field: &Field) -> &'static str {
    match field {
        Field::EventName => "Event name is required",
        Field::Phone => "Phone number is required",
        Field::DateTime => "Date is required",
        Field::Location => "Location is required",
        Field::Cost => "Cost is required",
        Field::Description => "Event Description is required",
        Field::Capacity => "Capacity is required",
    }
}

/// Failures of the underlying key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: u64, quota: u64 },

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A record could not be written.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to serialize event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A record could not be read back.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Event {id} is unreadable: {source}")]
    Unparseable {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A picked file could not be turned into an embeddable image.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Malformed data URL")]
    MalformedDataUrl,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
