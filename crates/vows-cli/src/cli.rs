//! Command-line argument wrappers and command execution
//!
//! Each command has a clap argument struct that converts into the matching
//! core parameter type, keeping clap out of `vows-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → EventStore
//! ```
//!
//! Location and date are optional at the clap level; missing values are
//! reported by [`EventDraft::validate`] like any other invalid draft.

use anyhow::{anyhow, Context, Result};
use clap::{Args, ValueEnum};
use log::debug;
use vows_core::{
    display::{CreateResult, EventList, SummaryReport, ToggleResult},
    params::{EventDraft, Id, ListEvents, SummarizeTimeline},
    EventCategory, EventStatus, EventStore, TimelineError,
};

use crate::renderer::TerminalRenderer;

/// List timeline events
#[derive(Args, Default)]
pub struct ListEventsArgs {
    /// Only show events with this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Print events as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

impl From<&ListEventsArgs> for ListEvents {
    fn from(val: &ListEventsArgs) -> Self {
        ListEvents {
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Show details of a single event
#[derive(Args)]
pub struct ShowEventArgs {
    /// ID of the event to display
    pub id: String,
}

impl From<ShowEventArgs> for Id {
    fn from(val: ShowEventArgs) -> Self {
        Id { id: val.id }
    }
}

/// Add a new event to the timeline
#[derive(Args)]
pub struct AddEventArgs {
    /// Title of the event, e.g. "Final dress fitting"
    pub title: String,
    /// Where the event takes place (required)
    #[arg(short, long)]
    pub location: Option<String>,
    /// Date of the event in YYYY-MM-DD format (required)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Time of day, e.g. "2:00 PM" (defaults to 12:00 PM)
    #[arg(short, long)]
    pub time: Option<String>,
    /// Planning category (defaults to planning)
    #[arg(short, long, value_enum)]
    pub category: Option<CategoryArg>,
    /// Initial status (defaults to upcoming)
    #[arg(short, long, value_enum)]
    pub status: Option<StatusArg>,
    /// Additional details about the event
    #[arg(long)]
    pub description: Option<String>,
}

impl From<AddEventArgs> for EventDraft {
    fn from(val: AddEventArgs) -> Self {
        EventDraft {
            title: val.title,
            location: val.location.unwrap_or_default(),
            date: val.date,
            time: val.time,
            category: val.category.map(|c| c.to_string()),
            status: val.status.map(|s| s.to_string()),
            description: val.description,
        }
    }
}

/// Toggle an event between completed and upcoming
#[derive(Args)]
pub struct ToggleStatusArgs {
    /// ID of the event to toggle
    pub id: String,
}

impl From<ToggleStatusArgs> for Id {
    fn from(val: ToggleStatusArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show progress and the wedding countdown
#[derive(Args)]
pub struct SummaryArgs {
    /// Count days from this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,
}

impl From<SummaryArgs> for SummarizeTimeline {
    fn from(val: SummaryArgs) -> Self {
        SummarizeTimeline { today: val.today }
    }
}

/// Command-line representation of event statuses
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Upcoming,
    InProgress,
    Completed,
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            StatusArg::Upcoming => EventStatus::Upcoming,
            StatusArg::InProgress => EventStatus::InProgress,
            StatusArg::Completed => EventStatus::Completed,
        };
        write!(f, "{}", status.as_str())
    }
}

/// Command-line representation of event categories
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Venue,
    Catering,
    Attire,
    Photography,
    Flowers,
    Music,
    Planning,
    WeddingDay,
}

impl std::fmt::Display for CategoryArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let category = match self {
            CategoryArg::Venue => EventCategory::Venue,
            CategoryArg::Catering => EventCategory::Catering,
            CategoryArg::Attire => EventCategory::Attire,
            CategoryArg::Photography => EventCategory::Photography,
            CategoryArg::Flowers => EventCategory::Flowers,
            CategoryArg::Music => EventCategory::Music,
            CategoryArg::Planning => EventCategory::Planning,
            CategoryArg::WeddingDay => EventCategory::WeddingDay,
        };
        write!(f, "{}", category.as_str())
    }
}

/// Runs CLI commands against a session store and renders the results.
pub struct Cli {
    store: EventStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: EventStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn list_events(&self, args: &ListEventsArgs) -> Result<()> {
        let status = ListEvents::from(args)
            .status_filter()
            .context("Failed to list events")?;

        let events = match status {
            Some(status) => self.store.events_with_status(status),
            None => self.store.list_events().to_vec(),
        };
        debug!("Listing {} events", events.len());

        if args.json {
            return self.renderer.render_json(&events);
        }

        let title = match status {
            Some(status) => format!("Wedding Timeline ({status})"),
            None => "Wedding Timeline".to_string(),
        };
        self.renderer
            .render(&EventList::with_title(&events, &title).to_string())
    }

    pub fn show_event(&self, params: &Id) -> Result<()> {
        let event = self
            .store
            .get_event(&params.id)
            .ok_or_else(|| anyhow!(TimelineError::not_found(params.id.as_str())))?;
        self.renderer.render(&event.to_string())
    }

    /// Adds an event, then shows it and the re-sorted timeline.
    pub fn add_event(&mut self, draft: &EventDraft) -> Result<()> {
        let event = self
            .store
            .add_event(draft)
            .context("Failed to add event")?;

        self.renderer.render(&CreateResult::new(event).to_string())?;
        println!();
        self.renderer.render(
            &EventList::with_title(self.store.list_events(), "Wedding Timeline").to_string(),
        )
    }

    pub fn toggle_status(&mut self, params: &Id) -> Result<()> {
        let previous = self
            .store
            .get_event(&params.id)
            .map(|event| event.status);

        let event = self
            .store
            .toggle_status(&params.id)
            .context("Failed to toggle event status")?;

        let previous = previous.unwrap_or_else(|| event.status.toggled());
        self.renderer
            .render(&ToggleResult::new(previous, event).to_string())
    }

    pub fn summary(&self, params: &SummarizeTimeline) -> Result<()> {
        let today = params
            .reference_date(jiff::Zoned::now().date())
            .context("Failed to summarize timeline")?;

        let report = SummaryReport {
            summary: self.store.summary(),
            next_event: self.store.next_upcoming(today),
            days_until_wedding: self.store.days_until_wedding(today),
        };
        self.renderer.render(&report.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_args_into_draft() {
        let args = AddEventArgs {
            title: "Cake Tasting".to_string(),
            location: Some("Bakery".to_string()),
            date: Some("2024-03-01".to_string()),
            time: None,
            category: Some(CategoryArg::WeddingDay),
            status: Some(StatusArg::InProgress),
            description: None,
        };

        let draft = EventDraft::from(args);
        assert_eq!(draft.category.as_deref(), Some("wedding-day"));
        assert_eq!(draft.status.as_deref(), Some("in-progress"));

        let event = draft.validate().unwrap();
        assert_eq!(event.category, EventCategory::WeddingDay);
        assert_eq!(event.status, EventStatus::InProgress);
    }

    #[test]
    fn test_add_args_missing_location_fails_validation() {
        let args = AddEventArgs {
            title: "Cake Tasting".to_string(),
            location: None,
            date: Some("2024-03-01".to_string()),
            time: None,
            category: None,
            status: None,
            description: None,
        };

        let error = EventDraft::from(args).validate().unwrap_err();
        assert!(error.is_validation());
    }

    #[test]
    fn test_list_args_status_filter() {
        let args = ListEventsArgs {
            status: Some(StatusArg::Completed),
            json: false,
        };
        assert_eq!(
            ListEvents::from(&args).status_filter().unwrap(),
            Some(EventStatus::Completed)
        );
    }
}
