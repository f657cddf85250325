//! In-memory timeline store.
//!
//! [`EventStore`] owns the ordered collection of [`TimelineEvent`]s for one
//! session. Two operations mutate it: [`EventStore::add_event`] and
//! [`EventStore::toggle_status`]. Both either succeed completely or leave the
//! store exactly as it was.

use std::{collections::HashSet, fmt};

use jiff::civil::Date;
use log::debug;

use crate::{
    error::{Result, TimelineError},
    models::{EventCategory, EventStatus, NewEvent, TimelineEvent, TimelineSummary},
    notify::{Notification, Notifier},
    params::EventDraft,
};

mod builder;
pub mod sample;


pub use builder::EventStoreBuilder;

/// Ordered collection of timeline events.
///
/// Events are always sorted ascending by date. Events sharing a date keep the
/// order in which they were inserted.
pub struct EventStore {
    events: Vec<TimelineEvent>,
    next_id: u64,
    notifier: Option<Box<dyn Notifier>>,
}

impl EventStore {
    /// Creates an empty store without a notifier.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 0,
            notifier: None,
        }
    }

    /// Creates a store holding the given events.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Configuration` if two events share an ID.
    pub fn from_events(events: Vec<TimelineEvent>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(TimelineError::Configuration {
                    message: format!("Duplicate event ID '{}' in initial timeline", event.id),
                });
            }
        }

        // Generated IDs continue after the highest numeric ID already present.
        let next_id = events
            .iter()
            .filter_map(|event| event.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        let mut store = Self {
            events,
            next_id,
            notifier: None,
        };
        store.sort();
        Ok(store)
    }

    pub(crate) fn set_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifier = Some(notifier);
    }

    /// Validates a draft and inserts the resulting event.
    ///
    /// On success the new event (with its generated ID) is returned and the
    /// collection is re-sorted by date.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Validation` when title, location or date is
    /// missing or malformed. The store is not modified.
    pub fn add_event(&mut self, draft: &EventDraft) -> Result<TimelineEvent> {
        match draft.validate() {
            Ok(new_event) => Ok(self.insert(new_event)),
            Err(e) => {
                debug!("Rejected event draft: {e}");
                self.notify(&Notification::missing_information());
                Err(e)
            }
        }
    }

    /// Inserts an already validated event and returns it with its new ID.
    pub fn insert(&mut self, new_event: NewEvent) -> TimelineEvent {
        let event = TimelineEvent {
            id: self.generate_id(),
            date: new_event.date,
            time: new_event.time,
            title: new_event.title,
            location: new_event.location,
            category: new_event.category,
            status: new_event.status,
            description: new_event.description,
        };

        debug!("Adding event {} '{}' on {}", event.id, event.title, event.date);
        self.events.push(event.clone());
        self.sort();
        self.notify(&Notification::event_added(&event));
        event
    }

    /// Flips an event between completed and not completed.
    ///
    /// Completed events become upcoming; upcoming and in-progress events
    /// become completed.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::NotFound` if no event has the given ID.
    pub fn toggle_status(&mut self, id: &str) -> Result<TimelineEvent> {
        let event = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| TimelineError::not_found(id))?;

        let previous = event.status;
        event.status = previous.toggled();
        debug!(
            "Toggled event {} from {} to {}",
            event.id,
            previous.as_str(),
            event.status.as_str()
        );

        let updated = event.clone();
        self.notify(&Notification::status_toggled(previous, &updated));
        Ok(updated)
    }

    /// All events, ascending by date.
    pub fn list_events(&self) -> &[TimelineEvent] {
        &self.events
    }

    /// Events with the given status, ascending by date.
    pub fn events_with_status(&self, status: EventStatus) -> Vec<TimelineEvent> {
        self.events
            .iter()
            .filter(|event| event.status == status)
            .cloned()
            .collect()
    }

    /// Looks up a single event.
    pub fn get_event(&self, id: &str) -> Option<&TimelineEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event counts per status.
    pub fn summary(&self) -> TimelineSummary {
        TimelineSummary::from(self.events.as_slice())
    }

    /// The earliest event on or after `today` that is not yet completed.
    pub fn next_upcoming(&self, today: Date) -> Option<&TimelineEvent> {
        self.events
            .iter()
            .find(|event| event.date >= today && !event.is_completed())
    }

    /// Days from `today` until the first wedding-day event.
    ///
    /// Negative once the wedding date has passed; `None` when the timeline
    /// has no wedding-day event.
    pub fn days_until_wedding(&self, today: Date) -> Option<i64> {
        let wedding = self
            .events
            .iter()
            .find(|event| event.category == EventCategory::WeddingDay)?;

        // Date spans default to days as their largest unit.
        today
            .until(wedding.date)
            .ok()
            .map(|span| i64::from(span.get_days()))
    }

    fn generate_id(&mut self) -> String {
        // Wraps past u64::MAX; the store never holds enough events to exhaust
        // the counter, so the loop always finds a free ID.
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let candidate = self.next_id.to_string();
            if self.get_event(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn sort(&mut self) {
        // `sort_by_key` is stable, which keeps same-day events in insertion order.
        self.events.sort_by_key(|event| event.date);
    }

    fn notify(&self, notification: &Notification) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(notification);
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events", &self.events)
            .field("next_id", &self.next_id)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}
