//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::notify::{Notification, NotificationVariant};

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&Notification> for OperationStatus {
    fn from(notification: &Notification) -> Self {
        let message = format!("{}: {}", notification.title, notification.description);
        match notification.variant {
            NotificationVariant::Default => Self::success(message),
            NotificationVariant::Destructive => Self::failure(message),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
