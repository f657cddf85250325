//! Display implementations for domain models.
//!
//! All output is markdown so it renders richly in the terminal and stays
//! readable as plain text for MCP clients.

use std::fmt;

use super::datetime::LongDate;
use crate::models::{EventCategory, EventStatus, TimelineEvent, TimelineSummary};

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for TimelineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Date: {} at {}", LongDate(&self.date), self.time)?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for TimelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Progress")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Completed: {}/{} ({}%)",
            self.completed_events,
            self.total_events,
            self.completion_percent()
        )?;
        writeln!(f, "- Upcoming: {}", self.upcoming_events)?;
        writeln!(f, "- In progress: {}", self.in_progress_events)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn create_test_event() -> TimelineEvent {
        TimelineEvent {
            id: "4".to_string(),
            date: date(2024, 4, 1),
            time: "3:00 PM".to_string(),
            title: "Photographer Meeting".to_string(),
            location: "Studio Downtown".to_string(),
            category: EventCategory::Photography,
            status: EventStatus::Upcoming,
            description: Some("Engagement shoot".to_string()),
        }
    }

    #[test]
    fn test_event_display() {
        let output = create_test_event().to_string();

        assert!(output.starts_with("### 4. Photographer Meeting (○ Upcoming)\n"));
        assert!(output.contains("- Date: April 1st, 2024 at 3:00 PM"));
        assert!(output.contains("- Location: Studio Downtown"));
        assert!(output.contains("- Category: Photography"));
        assert!(output.contains("Engagement shoot"));
    }

    #[test]
    fn test_event_display_without_description() {
        let mut event = create_test_event();
        event.description = None;
        event.status = EventStatus::Completed;

        let output = event.to_string();
        assert!(output.contains("(✓ Completed)"));
        assert!(output.ends_with("- Category: Photography\n\n"));
    }

    #[test]
    fn test_summary_display() {
        let summary = TimelineSummary {
            total_events: 5,
            completed_events: 2,
            upcoming_events: 2,
            in_progress_events: 1,
        };
        let output = summary.to_string();
        assert!(output.contains("- Completed: 2/5 (40%)"));
        assert!(output.contains("- In progress: 1"));
    }

    #[test]
    fn test_enum_display() {
        assert_eq!(EventStatus::InProgress.to_string(), "in-progress");
        assert_eq!(EventCategory::WeddingDay.to_string(), "Wedding Day");
    }
}
