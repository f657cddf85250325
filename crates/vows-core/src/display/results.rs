//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::LongDate;
use crate::models::{EventStatus, TimelineEvent, TimelineSummary};

/// Wrapper type for displaying the result of an add operation.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use vows_core::{display::CreateResult, models::NewEvent, EventStore};
///
/// let mut store = EventStore::new();
/// let event = store.insert(NewEvent::new("Cake Tasting", "Bakery", date(2024, 3, 1)));
///
/// let output = CreateResult::new(event).to_string();
/// assert!(output.contains("Added event with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<TimelineEvent> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added event with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of a status toggle.
pub struct ToggleResult {
    pub previous: EventStatus,
    pub event: TimelineEvent,
}

impl ToggleResult {
    pub fn new(previous: EventStatus, event: TimelineEvent) -> Self {
        Self { previous, event }
    }
}

impl fmt::Display for ToggleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Event {} marked as {} (was {})",
            self.event.id, self.event.status, self.previous
        )?;
        writeln!(f)?;
        write!(f, "{}", self.event)
    }
}

/// Progress report combining status counts with the wedding countdown.
pub struct SummaryReport<'a> {
    pub summary: TimelineSummary,
    pub next_event: Option<&'a TimelineEvent>,
    pub days_until_wedding: Option<i64>,
}

impl<'a> fmt::Display for SummaryReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        writeln!(f)?;

        writeln!(f, "## Countdown")?;
        writeln!(f)?;
        match self.days_until_wedding {
            Some(0) => writeln!(f, "Today is the wedding day!")?,
            Some(1) => writeln!(f, "1 day until \"I do\"")?,
            Some(days) if days > 1 => writeln!(f, "{days} days until \"I do\"")?,
            Some(days) => writeln!(f, "The wedding was {} days ago", -days)?,
            None => writeln!(f, "No wedding day on the timeline yet.")?,
        }

        if let Some(event) = self.next_event {
            writeln!(f)?;
            writeln!(
                f,
                "Next up: **{}** on {} at {}",
                event.title,
                LongDate(&event.date),
                event.location
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::EventCategory;

    fn create_test_event(status: EventStatus) -> TimelineEvent {
        TimelineEvent {
            id: "2".to_string(),
            date: date(2024, 3, 1),
            time: "2:00 PM".to_string(),
            title: "Cake Tasting".to_string(),
            location: "Sweet Dreams Bakery".to_string(),
            category: EventCategory::Catering,
            status,
            description: None,
        }
    }

    #[test]
    fn test_create_result_display() {
        let output = CreateResult::new(create_test_event(EventStatus::Upcoming)).to_string();
        assert!(output.starts_with("Added event with ID: 2\n\n### 2. Cake Tasting"));
    }

    #[test]
    fn test_toggle_result_display() {
        let result = ToggleResult::new(
            EventStatus::Upcoming,
            create_test_event(EventStatus::Completed),
        );
        let output = result.to_string();
        assert!(output.contains("Event 2 marked as completed (was upcoming)"));
        assert!(output.contains("✓ Completed"));
    }

    #[test]
    fn test_summary_report_countdown() {
        let event = create_test_event(EventStatus::Upcoming);
        let report = SummaryReport {
            summary: TimelineSummary::default(),
            next_event: Some(&event),
            days_until_wedding: Some(106),
        };
        let output = report.to_string();
        assert!(output.contains("106 days until \"I do\""));
        assert!(output.contains("Next up: **Cake Tasting** on March 1st, 2024 at Sweet Dreams Bakery"));
    }

    #[test]
    fn test_summary_report_edges() {
        let report = |days| SummaryReport {
            summary: TimelineSummary::default(),
            next_event: None,
            days_until_wedding: days,
        };
        assert!(report(Some(0)).to_string().contains("Today is the wedding day!"));
        assert!(report(Some(1)).to_string().contains("1 day until"));
        assert!(report(Some(-3)).to_string().contains("The wedding was 3 days ago"));
        assert!(report(None).to_string().contains("No wedding day on the timeline yet."));
    }
}
