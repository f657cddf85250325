//! Display wrapper types for formatting different contexts.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module format the same data for a particular
//! context: a titled list, the outcome of an add or toggle, or a progress
//! report. Every formatter produces markdown.
//!
//! - [`EventList`]: Formats a timeline with an optional title
//! - [`CreateResult`]: Formats the result of adding an event
//! - [`ToggleResult`]: Formats a status change
//! - [`SummaryReport`]: Formats progress and the wedding countdown
//! - [`OperationStatus`]: Formats success/failure messages

use std::fmt;

use crate::models::TimelineEvent;

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LongDate;
pub use results::{CreateResult, SummaryReport, ToggleResult};
pub use status::OperationStatus;

/// Wrapper type for displaying a timeline as a formatted list.
///
/// # Examples
///
/// ```rust
/// use vows_core::{display::EventList, EventStoreBuilder};
///
/// let store = EventStoreBuilder::new().with_sample_timeline(true).build()?;
/// let output = EventList::with_title(store.list_events(), "Wedding Timeline").to_string();
/// assert!(output.starts_with("# Wedding Timeline"));
/// assert!(output.contains("Cake Tasting"));
/// # Result::<(), vows_core::TimelineError>::Ok(())
/// ```
pub struct EventList<'a> {
    events: &'a [TimelineEvent],
    title: Option<&'a str>,
}

impl<'a> EventList<'a> {
    /// Create a new EventList wrapper.
    pub fn new(events: &'a [TimelineEvent]) -> Self {
        Self {
            events,
            title: None,
        }
    }

    /// Create an EventList with a title header.
    pub fn with_title(events: &'a [TimelineEvent], title: &'a str) -> Self {
        Self {
            events,
            title: Some(title),
        }
    }
}

impl<'a> fmt::Display for EventList<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.events.is_empty() {
            writeln!(f, "No events found.")?;
            return Ok(());
        }

        for event in self.events {
            write!(f, "{event}")?;
        }

        Ok(())
    }
}
