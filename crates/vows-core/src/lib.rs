//! Core library for the vows wedding planning timeline.
//!
//! This crate provides the timeline event model, draft validation, the
//! in-memory [`EventStore`] that keeps events ordered by date, notifications
//! about store changes and markdown display wrappers.
//!
//! # Quick Start
//!
//! ```rust
//! use vows_core::{params::EventDraft, EventStoreBuilder};
//!
//! let mut store = EventStoreBuilder::new().build()?;
//!
//! store.add_event(&EventDraft::new("Cake Tasting", "Bakery", "2024-03-01"))?;
//! let venue = store.add_event(&EventDraft::new("Venue Visit", "Hall", "2024-02-15"))?;
//!
//! // Events are kept in date order regardless of insertion order.
//! assert_eq!(store.list_events()[0].title, "Venue Visit");
//!
//! let toggled = store.toggle_status(&venue.id)?;
//! println!("{}", toggled);
//! # Result::<(), vows_core::TimelineError>::Ok(())
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod notify;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, EventList, LongDate, OperationStatus, SummaryReport, ToggleResult};
pub use error::{Result, TimelineError};
pub use models::{EventCategory, EventStatus, NewEvent, TimelineEvent, TimelineSummary};
pub use notify::{Notification, NotificationVariant, Notifier, RecordingNotifier};
pub use params::{EventDraft, Id, ListEvents, SummarizeTimeline};
pub use store::{EventStore, EventStoreBuilder};
