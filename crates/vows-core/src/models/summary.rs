//! Aggregate progress information for a timeline.

use serde::{Deserialize, Serialize};

use super::{EventStatus, TimelineEvent};

/// Event counts per status for a timeline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineSummary {
    /// Total number of events
    pub total_events: u32,
    /// Number of completed events
    pub completed_events: u32,
    /// Number of upcoming events
    pub upcoming_events: u32,
    /// Number of events in progress
    pub in_progress_events: u32,
}

impl TimelineSummary {
    /// Share of completed events as a whole percentage (0 for an empty
    /// timeline).
    pub fn completion_percent(&self) -> u32 {
        if self.total_events == 0 {
            0
        } else {
            self.completed_events * 100 / self.total_events
        }
    }

    /// Events that are not yet completed.
    pub fn pending_events(&self) -> u32 {
        self.total_events - self.completed_events
    }
}

impl From<&[TimelineEvent]> for TimelineSummary {
    fn from(events: &[TimelineEvent]) -> Self {
        events
            .iter()
            .fold(TimelineSummary::default(), |mut summary, event| {
                summary.total_events += 1;
                match event.status {
                    EventStatus::Completed => summary.completed_events += 1,
                    EventStatus::Upcoming => summary.upcoming_events += 1,
                    EventStatus::InProgress => summary.in_progress_events += 1,
                }
                summary
            })
    }
}
