//! Error types for the timeline library.

use thiserror::Error;

/// Comprehensive error type for all timeline operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A required field was missing or malformed in an event draft
    #[error("Invalid input for field '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// No event exists for the given ID
    #[error("Event with ID {id} not found")]
    NotFound { id: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TimelineError {
        TimelineError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TimelineError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for an event ID.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Returns true for errors caused by a rejected event draft.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true when the referenced event does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let error = TimelineError::invalid_input("title").with_reason("Title is required");
        assert!(error.is_validation());
        assert!(!error.is_not_found());
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'title': Title is required"
        );
    }

    #[test]
    fn test_not_found_message() {
        let error = TimelineError::not_found("42");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Event with ID 42 not found");
    }
}
