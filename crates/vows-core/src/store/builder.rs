//! Builder for creating and configuring EventStore instances.

use log::debug;

use super::{sample, EventStore};
use crate::{error::Result, notify::Notifier};

/// Builder for creating and configuring EventStore instances.
#[derive(Default)]
pub struct EventStoreBuilder {
    sample_timeline: bool,
    notifier: Option<Box<dyn Notifier>>,
}

impl EventStoreBuilder {
    /// Creates a new builder producing an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the sample wedding timeline.
    pub fn with_sample_timeline(mut self, enabled: bool) -> Self {
        self.sample_timeline = enabled;
        self
    }

    /// Sets the receiver for notifications about store changes.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Builds the configured store.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Configuration` if the seed timeline contains
    /// duplicate IDs.
    pub fn build(self) -> Result<EventStore> {
        let mut store = if self.sample_timeline {
            EventStore::from_events(sample::sample_timeline())?
        } else {
            EventStore::new()
        };

        if let Some(notifier) = self.notifier {
            store.set_notifier(notifier);
        }

        debug!("Built event store with {} events", store.len());
        Ok(store)
    }
}
