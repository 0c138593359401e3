//! In-progress event details on the editor screen.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::error::ValidationError;
use crate::event::{EventRecord, EventTime};
use crate::image::ImageSlot;

/// The editable text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    EventName,
    Phone,
    DateTime,
    Location,
    Cost,
    Description,
    Capacity,
}

impl Field {
    /// Required fields in the order they are checked.
    pub const REQUIRED: [Field; 6] = [
        Field::EventName,
        Field::Phone,
        Field::DateTime,
        Field::Location,
        Field::Cost,
        Field::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::EventName => "Event name",
            Field::Phone => "Phone number",
            Field::DateTime => "Date",
            Field::Location => "Location",
            Field::Cost => "Cost per person",
            Field::Description => "Description",
            Field::Capacity => "Capacity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything typed or picked so far, not yet persisted.
#[derive(Debug, Clone)]
pub struct EventDraft {
    event_name: String,
    phone: String,
    date_time: Option<EventTime>,
    location: String,
    cost: String,
    description: String,
    capacity: String,
    links: Vec<String>,
    image: Option<String>,
    background_image: Option<String>,
    show_capacity: bool,
    show_links: bool,
}

impl Default for EventDraft {
    fn default() -> Self {
        EventDraft {
            event_name: String::new(),
            phone: String::new(),
            date_time: None,
            location: String::new(),
            cost: String::new(),
            description: String::new(),
            capacity: String::new(),
            // The links section opens with one empty slot
            links: vec![String::new()],
            image: None,
            background_image: None,
            show_capacity: false,
            show_links: false,
        }
    }
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, checking dates against the local calendar day.
    pub fn update(&mut self, field: Field, value: impl Into<String>) -> Result<(), ValidationError> {
        self.update_on(field, value, Local::now().date_naive())
    }

    /// Set a field, checking dates against `today`.
    ///
    /// A rejected date leaves the previous date in place.
    pub fn update_on(
        &mut self,
        field: Field,
        value: impl Into<String>,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let value = value.into();

        match field {
            Field::EventName => self.event_name = value,
            Field::Phone => self.phone = value,
            Field::Location => self.location = value,
            Field::Cost => self.cost = value,
            Field::Description => self.description = value,
            Field::Capacity => self.capacity = value,
            Field::DateTime => {
                if value.trim().is_empty() {
                    self.date_time = None;
                    return Ok(());
                }
                let time: EventTime = value
                    .parse()
                    .map_err(|_| ValidationError::InvalidDate(value.clone()))?;
                if time.is_before(today) {
                    return Err(ValidationError::DateInPast);
                }
                self.date_time = Some(time);
            }
        }

        Ok(())
    }

    /// Current text of a field. Dates come back in their stored text form.
    pub fn get(&self, field: Field) -> String {
        match field {
            Field::EventName => self.event_name.clone(),
            Field::Phone => self.phone.clone(),
            Field::DateTime => self.date_time.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            Field::Location => self.location.clone(),
            Field::Cost => self.cost.clone(),
            Field::Description => self.description.clone(),
            Field::Capacity => self.capacity.clone(),
        }
    }

    pub fn date_time(&self) -> Option<&EventTime> {
        self.date_time.as_ref()
    }

    pub fn enable_capacity(&mut self) {
        self.show_capacity = true;
    }

    pub fn enable_links(&mut self) {
        self.show_links = true;
    }

    pub fn shows_capacity(&self) -> bool {
        self.show_capacity
    }

    pub fn shows_links(&self) -> bool {
        self.show_links
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn add_link(&mut self) {
        self.links.push(String::new());
    }

    /// Overwrite one link slot. Indexes past the end are ignored.
    pub fn update_link(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.links.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&str> {
        match slot {
            ImageSlot::Foreground => self.image.as_deref(),
            ImageSlot::Background => self.background_image.as_deref(),
        }
    }

    /// Replace an image. The latest call wins.
    pub fn set_image(&mut self, slot: ImageSlot, data_url: Option<String>) {
        match slot {
            ImageSlot::Foreground => self.image = data_url,
            ImageSlot::Background => self.background_image = data_url,
        }
    }

    /// First required field that is still blank, in check order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::REQUIRED.into_iter().find(|field| match field {
            Field::DateTime => self.date_time.is_none(),
            other => self.get(*other).trim().is_empty(),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.first_missing() {
            Some(field) => Err(ValidationError::Missing(field)),
            None => Ok(()),
        }
    }

    /// Build the record to persist.
    ///
    /// Optional sections are only carried over when enabled, and blank links
    /// are dropped.
    pub fn to_record(
        &self,
        id: String,
        created_at: DateTime<Utc>,
    ) -> Result<EventRecord, ValidationError> {
        self.validate()?;
        let date_time = self
            .date_time
            .clone()
            .ok_or(ValidationError::Missing(Field::DateTime))?;

        let links = if self.show_links {
            self.links
                .iter()
                .filter(|l| !l.trim().is_empty())
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Ok(EventRecord {
            id,
            event_name: self.event_name.clone(),
            phone: self.phone.clone(),
            date_time,
            location: self.location.clone(),
            cost: self.cost.clone(),
            description: self.description.clone(),
            capacity: self.show_capacity.then(|| self.capacity.clone()),
            links,
            image: self.image.clone(),
            background_image: self.background_image.clone(),
            created_at,
        })
    }
}
