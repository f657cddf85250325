//! Timeline event model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{EventCategory, EventStatus};

/// A dated milestone in the wedding planning process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Unique, opaque identifier assigned by the store
    pub id: String,

    /// Calendar date of the event, used for ordering
    pub date: Date,

    /// Free-text time of day, e.g. "2:00 PM"
    pub time: String,

    /// Short title of the event
    pub title: String,

    /// Where the event takes place
    pub location: String,

    /// Planning category
    #[serde(rename = "type")]
    pub category: EventCategory,

    /// Completion status
    pub status: EventStatus,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TimelineEvent {
    /// Whether the event has been marked as completed.
    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }
}
