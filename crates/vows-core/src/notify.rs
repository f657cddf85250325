//! User-facing notifications for timeline changes.
//!
//! The store never talks to a UI directly. Instead it hands a
//! [`Notification`] to whatever [`Notifier`] it was built with, so callers
//! decide how (and whether) messages are surfaced.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{EventStatus, TimelineEvent};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Something the user has to fix
    Destructive,
}

/// A short message describing the outcome of an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    /// Notification for a newly added event.
    pub fn event_added(event: &TimelineEvent) -> Self {
        Self {
            title: "Event Added".to_string(),
            description: format!("{} has been added to your timeline.", event.title),
            variant: NotificationVariant::Default,
        }
    }

    /// Notification for a status toggle, given the status before the toggle.
    pub fn status_toggled(previous: EventStatus, event: &TimelineEvent) -> Self {
        let title = if previous == EventStatus::Completed {
            "Marked as Pending"
        } else {
            "Marked as Complete"
        };
        Self {
            title: title.to_string(),
            description: format!("{} status updated.", event.title),
            variant: NotificationVariant::Default,
        }
    }

    /// Notification for a draft rejected by validation.
    pub fn missing_information() -> Self {
        Self {
            title: "Missing Information".to_string(),
            description: "Please fill in all required fields.".to_string(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Receiver for store notifications.
pub trait Notifier: Send {
    fn notify(&self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: Fn(&Notification) + Send,
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Notifier that keeps every notification it receives, mostly for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notifications received so far.
    pub fn received(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        if let Ok(mut received) = self.received.lock() {
            received.push(notification.clone());
        }
    }
}
