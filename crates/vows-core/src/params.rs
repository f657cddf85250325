//! Parameter structures for timeline operations
//!
//! This module contains the parameter structures shared by every interface
//! (CLI, MCP). They carry no framework-specific derives beyond serde and the
//! optional `schema` feature, so each interface wraps or converts them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! Drafts arrive unvalidated, exactly as a user typed them into a form.
//! [`EventDraft::validate`] is the single place where they become a
//! [`NewEvent`].

use std::str::FromStr;

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TimelineError},
    models::{requests::DEFAULT_EVENT_TIME, EventCategory, EventStatus, NewEvent},
};

/// Generic parameters for operations requiring just an event ID.
///
/// Used for show_event and toggle_status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the event to operate on
    pub id: String,
}

/// Unvalidated data for a new timeline event.
///
/// Mirrors the "Add Event" form: title, location and date are required,
/// everything else falls back to a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct EventDraft {
    /// Title of the event (required)
    #[serde(default)]
    pub title: String,
    /// Where the event takes place (required)
    #[serde(default)]
    pub location: String,
    /// Calendar date in YYYY-MM-DD format (required)
    pub date: Option<String>,
    /// Display time such as "2:00 PM"; defaults to "12:00 PM"
    pub time: Option<String>,
    /// Category: venue, catering, attire, photography, flowers, music,
    /// planning or wedding-day; defaults to planning
    #[serde(rename = "type", alias = "category")]
    pub category: Option<String>,
    /// Initial status: upcoming, in-progress or completed; defaults to
    /// upcoming
    pub status: Option<String>,
    /// Optional longer description
    pub description: Option<String>,
}

impl EventDraft {
    /// Create a draft with just the three required fields filled in.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            date: Some(date.into()),
            ..Default::default()
        }
    }

    /// Validate the draft and resolve defaults.
    ///
    /// Validation is pure: the same draft always produces the same outcome
    /// and nothing outside the draft is consulted.
    ///
    /// Title, location, time and description are stored with surrounding
    /// whitespace trimmed, so a title of `"  Cake  "` becomes `"Cake"` and a
    /// whitespace-only title counts as missing.
    ///
    /// # Errors
    ///
    /// * `TimelineError::Validation` - When title or location is blank
    /// * `TimelineError::Validation` - When date is missing or not a valid
    ///   `YYYY-MM-DD` calendar date
    /// * `TimelineError::Validation` - When category or status is not
    ///   recognised
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vows_core::params::EventDraft;
    ///
    /// let event = EventDraft::new("Cake Tasting", "Bakery", "2024-03-01").validate()?;
    /// assert_eq!(event.time, "12:00 PM");
    ///
    /// let error = EventDraft::new("", "Bakery", "2024-03-01").validate();
    /// assert!(error.is_err());
    /// # use vows_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<NewEvent> {
        let title = required_text("title", &self.title, "Title is required")?;
        let location = required_text("location", &self.location, "Location is required")?;
        let date = self.parse_date()?;

        let category = match non_blank(self.category.as_deref()) {
            Some(value) => EventCategory::from_str(value).map_err(|_| {
                TimelineError::invalid_input("type").with_reason(format!(
                    "Invalid category: {value}. Must be one of venue, catering, attire, \
                     photography, flowers, music, planning or wedding-day"
                ))
            })?,
            None => EventCategory::default(),
        };

        let status = match non_blank(self.status.as_deref()) {
            Some(value) => EventStatus::from_str(value).map_err(|_| {
                TimelineError::invalid_input("status").with_reason(format!(
                    "Invalid status: {value}. Must be 'upcoming', 'in-progress', or 'completed'"
                ))
            })?,
            None => EventStatus::default(),
        };

        Ok(NewEvent {
            title,
            location,
            date,
            time: non_blank(self.time.as_deref())
                .unwrap_or(DEFAULT_EVENT_TIME)
                .to_string(),
            category,
            status,
            description: non_blank(self.description.as_deref()).map(str::to_string),
        })
    }

    fn parse_date(&self) -> Result<Date> {
        let value = non_blank(self.date.as_deref()).ok_or_else(|| {
            TimelineError::invalid_input("date").with_reason("Date is required")
        })?;

        value.parse::<Date>().map_err(|e| {
            TimelineError::invalid_input("date").with_reason(format!(
                "Invalid date '{value}', expected YYYY-MM-DD: {e}"
            ))
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn required_text(field: &str, value: &str, reason: &str) -> Result<String> {
    match non_blank(Some(value)) {
        Some(text) => Ok(text.to_string()),
        None => Err(TimelineError::invalid_input(field).with_reason(reason)),
    }
}

/// Parameters for listing the timeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListEvents {
    /// Only show events with this status (upcoming, in-progress, completed)
    #[serde(default)]
    pub status: Option<String>,
}

impl ListEvents {
    /// Parse the optional status filter.
    pub fn status_filter(&self) -> Result<Option<EventStatus>> {
        non_blank(self.status.as_deref())
            .map(|value| {
                EventStatus::from_str(value).map_err(|reason| {
                    TimelineError::invalid_input("status").with_reason(reason)
                })
            })
            .transpose()
    }
}

/// Parameters for summarising timeline progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SummarizeTimeline {
    /// Reference date (YYYY-MM-DD) for the countdown; defaults to today
    #[serde(default)]
    pub today: Option<String>,
}

impl SummarizeTimeline {
    /// Resolve the reference date, falling back to `fallback` when unset.
    pub fn reference_date(&self, fallback: Date) -> Result<Date> {
        match non_blank(self.today.as_deref()) {
            Some(value) => value.parse::<Date>().map_err(|e| {
                TimelineError::invalid_input("today").with_reason(format!(
                    "Invalid date '{value}', expected YYYY-MM-DD: {e}"
                ))
            }),
            None => Ok(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn field_of(error: TimelineError) -> String {
        match error {
            TimelineError::Validation { field, .. } => field,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_applies_defaults() {
        let event = EventDraft::new("Cake Tasting", "Bakery", "2024-03-01")
            .validate()
            .unwrap();

        assert_eq!(event.title, "Cake Tasting");
        assert_eq!(event.location, "Bakery");
        assert_eq!(event.date, date(2024, 3, 1));
        assert_eq!(event.time, "12:00 PM");
        assert_eq!(event.category, EventCategory::Planning);
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_validate_keeps_optional_fields() {
        let draft = EventDraft {
            time: Some("2:00 PM".to_string()),
            category: Some("catering".to_string()),
            status: Some("in-progress".to_string()),
            description: Some("Flavors and design".to_string()),
            ..EventDraft::new("Cake Tasting", "Bakery", "2024-03-01")
        };

        let event = draft.validate().unwrap();
        assert_eq!(event.time, "2:00 PM");
        assert_eq!(event.category, EventCategory::Catering);
        assert_eq!(event.status, EventStatus::InProgress);
        assert_eq!(event.description.as_deref(), Some("Flavors and design"));
    }

    #[test]
    fn test_validate_blank_optionals_fall_back() {
        let draft = EventDraft {
            time: Some("   ".to_string()),
            category: Some(String::new()),
            description: Some(String::new()),
            ..EventDraft::new("Dress Fitting", "Elegant Bridal", "2024-03-15")
        };

        let event = draft.validate().unwrap();
        assert_eq!(event.time, "12:00 PM");
        assert_eq!(event.category, EventCategory::Planning);
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_validate_missing_title() {
        let error = EventDraft::new("", "X", "2024-03-01").validate().unwrap_err();
        assert_eq!(error.to_string(), "Invalid input for field 'title': Title is required");
    }

    #[test]
    fn test_validate_whitespace_title_is_missing() {
        let error = EventDraft::new("   ", "X", "2024-03-01").validate().unwrap_err();
        assert_eq!(field_of(error), "title");
    }

    #[test]
    fn test_validate_trims_text_fields() {
        let draft = EventDraft {
            time: Some(" 2:00 PM ".to_string()),
            description: Some("  Flavors  ".to_string()),
            ..EventDraft::new("  Cake Tasting  ", "\tBakery ", "2024-03-01")
        };

        let event = draft.validate().unwrap();
        assert_eq!(event.title, "Cake Tasting");
        assert_eq!(event.location, "Bakery");
        assert_eq!(event.time, "2:00 PM");
        assert_eq!(event.description.as_deref(), Some("Flavors"));
    }

    #[test]
    fn test_validate_missing_location() {
        let error = EventDraft::new("Cake Tasting", "", "2024-03-01")
            .validate()
            .unwrap_err();
        assert_eq!(field_of(error), "location");
    }

    #[test]
    fn test_validate_missing_date() {
        let draft = EventDraft {
            date: None,
            ..EventDraft::new("Cake Tasting", "Bakery", "")
        };
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Invalid input for field 'date': Date is required");
    }

    #[test]
    fn test_validate_malformed_date() {
        let error = EventDraft::new("Cake Tasting", "Bakery", "2024-02-30")
            .validate()
            .unwrap_err();
        assert_eq!(field_of(error), "date");

        let error = EventDraft::new("Cake Tasting", "Bakery", "next tuesday")
            .validate()
            .unwrap_err();
        assert!(error.to_string().contains("expected YYYY-MM-DD"));
    }

    #[test]
    fn test_validate_unknown_category_and_status() {
        let draft = EventDraft {
            category: Some("honeymoon".to_string()),
            ..EventDraft::new("Cake Tasting", "Bakery", "2024-03-01")
        };
        assert_eq!(field_of(draft.validate().unwrap_err()), "type");

        let draft = EventDraft {
            status: Some("done".to_string()),
            ..EventDraft::new("Cake Tasting", "Bakery", "2024-03-01")
        };
        assert_eq!(field_of(draft.validate().unwrap_err()), "status");
    }

    #[test]
    fn test_validate_is_deterministic() {
        let draft = EventDraft::new("Venue Visit", "Hall", "2024-02-15");
        assert_eq!(draft.validate().unwrap(), draft.validate().unwrap());
    }

    #[test]
    fn test_try_from_draft() {
        let event: NewEvent = EventDraft::new("Venue Visit", "Hall", "2024-02-15")
            .try_into()
            .unwrap();
        assert_eq!(event.title, "Venue Visit");
    }

    #[test]
    fn test_draft_deserializes_type_field() {
        let draft: EventDraft = serde_json::from_value(serde_json::json!({
            "title": "Flowers",
            "location": "Florist",
            "date": "2024-05-01",
            "type": "flowers"
        }))
        .unwrap();
        assert_eq!(draft.validate().unwrap().category, EventCategory::Flowers);
    }

    #[test]
    fn test_list_events_status_filter() {
        let params = ListEvents::default();
        assert_eq!(params.status_filter().unwrap(), None);

        let params = ListEvents {
            status: Some("completed".to_string()),
        };
        assert_eq!(params.status_filter().unwrap(), Some(EventStatus::Completed));

        let params = ListEvents {
            status: Some("bogus".to_string()),
        };
        assert!(params.status_filter().unwrap_err().is_validation());
    }

    #[test]
    fn test_summarize_reference_date() {
        let fallback = date(2024, 1, 1);
        assert_eq!(
            SummarizeTimeline::default().reference_date(fallback).unwrap(),
            fallback
        );

        let params = SummarizeTimeline {
            today: Some("2024-06-01".to_string()),
        };
        assert_eq!(params.reference_date(fallback).unwrap(), date(2024, 6, 1));
    }
}
