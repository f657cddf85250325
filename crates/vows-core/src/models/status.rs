//! Status enumeration for timeline events.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of event statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    /// Event has taken place or its preparation is finished
    Completed,

    /// Event is still ahead
    #[default]
    Upcoming,

    /// Event preparation is underway
    InProgress,
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(EventStatus::Completed),
            "upcoming" => Ok(EventStatus::Upcoming),
            "in-progress" | "inprogress" | "in_progress" => Ok(EventStatus::InProgress),
            _ => Err(format!("Invalid event status: {s}")),
        }
    }
}

impl EventStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Completed => "completed",
            EventStatus::Upcoming => "upcoming",
            EventStatus::InProgress => "in-progress",
        }
    }

    /// The status reached by toggling the completion checkbox.
    ///
    /// Completed events reopen as upcoming; anything else becomes completed.
    /// There is no way back to `InProgress`, so toggling is directional rather
    /// than an involution.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vows_core::models::EventStatus;
    ///
    /// assert_eq!(EventStatus::Completed.toggled(), EventStatus::Upcoming);
    /// assert_eq!(EventStatus::Upcoming.toggled(), EventStatus::Completed);
    /// assert_eq!(EventStatus::InProgress.toggled(), EventStatus::Completed);
    /// ```
    pub fn toggled(self) -> Self {
        match self {
            EventStatus::Completed => EventStatus::Upcoming,
            EventStatus::Upcoming | EventStatus::InProgress => EventStatus::Completed,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for finished events
    /// - `➤ In Progress` - Arrow for events being prepared
    /// - `○ Upcoming` - Circle for events still ahead
    pub fn with_icon(&self) -> &'static str {
        match self {
            EventStatus::Completed => "✓ Completed",
            EventStatus::InProgress => "➤ In Progress",
            EventStatus::Upcoming => "○ Upcoming",
        }
    }
}
