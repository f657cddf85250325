//! Validated request types for inserting events.

use jiff::civil::Date;

use super::{EventCategory, EventStatus};

/// Time shown for events created without one.
pub const DEFAULT_EVENT_TIME: &str = "12:00 PM";

/// A validated event ready to be inserted into the store.
///
/// Everything except the ID is known; the store assigns the ID on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub location: String,
    pub date: Date,
    pub time: String,
    pub category: EventCategory,
    pub status: EventStatus,
    pub description: Option<String>,
}

impl NewEvent {
    /// Create a NewEvent with the default time, category and status.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::civil::date;
    /// use vows_core::models::{EventCategory, EventStatus, NewEvent};
    ///
    /// let event = NewEvent::new("Cake Tasting", "Bakery", date(2024, 3, 1));
    /// assert_eq!(event.time, "12:00 PM");
    /// assert_eq!(event.category, EventCategory::Planning);
    /// assert_eq!(event.status, EventStatus::Upcoming);
    /// ```
    pub fn new(title: impl Into<String>, location: impl Into<String>, date: Date) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            date,
            time: DEFAULT_EVENT_TIME.to_string(),
            category: EventCategory::default(),
            status: EventStatus::default(),
            description: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl TryFrom<crate::params::EventDraft> for NewEvent {
    type Error = crate::TimelineError;

    /// Convert an unvalidated draft into a NewEvent.
    ///
    /// # Errors
    ///
    /// * `TimelineError::Validation` - When title, location or date is missing
    ///   or a category/status string is not recognised
    fn try_from(draft: crate::params::EventDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}
