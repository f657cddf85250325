//! Data models for the wedding timeline.
//!
//! This module contains the core domain models: timeline events, their
//! categories and statuses, validated insertion requests and aggregate
//! summaries. Display implementations for these models live in
//! [`crate::display::models`] so that data structures stay free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use vows_core::models::{EventCategory, EventStatus, TimelineEvent};
//!
//! let event = TimelineEvent {
//!     id: "1".to_string(),
//!     date: date(2024, 2, 15),
//!     time: "10:00 AM".to_string(),
//!     title: "Venue Site Visit".to_string(),
//!     location: "The Grand Ballroom".to_string(),
//!     category: EventCategory::Venue,
//!     status: EventStatus::Completed,
//!     description: None,
//! };
//! println!("{}", event); // Shows ✓ Completed status icon
//! ```

pub mod category;
pub mod event;
pub mod requests;
pub mod status;
pub mod summary;


pub use category::EventCategory;
pub use event::TimelineEvent;
pub use requests::NewEvent;
pub use status::EventStatus;
pub use summary::TimelineSummary;
