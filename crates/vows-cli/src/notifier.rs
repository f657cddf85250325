//! Notification sink that reports store changes through the log facade.

use log::{info, warn};
use vows_core::{Notification, Notifier, OperationStatus};

/// Forwards store notifications to the logger.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        let status = OperationStatus::from(notification);
        if status.success {
            info!("{}", status.message);
        } else {
            warn!("{}", status.message);
        }
    }
}
