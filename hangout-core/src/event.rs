//! The persisted event record.
//!
//! Field names serialize in camelCase so the stored JSON reads the same as
//! the record shape the pages exchange: `eventName`, `dateTime`,
//! `backgroundImage`, `createdAt`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One created event, immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub event_name: String,
    pub phone: String,
    pub date_time: EventTime,
    pub location: String,
    pub cost: String,
    pub description: String,

    /// Present only when the creator opted into a capacity.
    #[serde(default)]
    pub capacity: Option<String>,

    /// Never contains blank entries. A stored `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<String>,

    /// Foreground photo as a `data:` URL.
    #[serde(default)]
    pub image: Option<String>,

    /// Page background as a `data:` URL.
    #[serde(default)]
    pub background_image: Option<String>,

    pub created_at: DateTime<Utc>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl EventRecord {
    /// Capacity text, empty when the creator skipped it.
    pub fn capacity_text(&self) -> &str {
        self.capacity.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.event_name)
    }
}

/// When the event happens.
///
/// A date picker yields `YYYY-MM-DD`, a date-time picker yields
/// `YYYY-MM-DDTHH:MM`. Both are kept as entered (no timezone) and stored as
/// that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventTime {
    Date(NaiveDate),
    DateTimeFloating(NaiveDateTime),

    /// Stored text in any other shape, kept verbatim. Only reading a record
    /// produces this; `parse` rejects it.
    Text(String),
}

impl EventTime {
    /// The calendar day, which is all the future-date rule looks at.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            EventTime::Date(d) => Some(*d),
            EventTime::DateTimeFloating(dt) => Some(dt.date()),
            EventTime::Text(_) => None,
        }
    }

    pub fn is_before(&self, day: NaiveDate) -> bool {
        self.date().is_some_and(|d| d < day)
    }
}

impl FromStr for EventTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(EventTime::Date(d));
        }

        for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(EventTime::DateTimeFloating(dt));
            }
        }

        Err(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM",
            s
        ))
    }
}

impl From<String> for EventTime {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(EventTime::Text(value))
    }
}

impl From<EventTime> for String {
    fn from(time: EventTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTimeFloating(dt) => {
                if dt.nanosecond() != 0 {
                    write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f"))
                } else if dt.second() != 0 {
                    write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S"))
                } else {
                    write!(f, "{}", dt.format("%Y-%m-%dT%H:%M"))
                }
            }
            EventTime::Text(text) => f.write_str(text),
        }
    }
}
