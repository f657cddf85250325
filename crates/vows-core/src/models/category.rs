//! Planning categories for timeline events.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed set of categories an event can belong to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Venue,
    Catering,
    Attire,
    Photography,
    Flowers,
    Music,
    #[default]
    Planning,
    #[serde(alias = "wedding", alias = "wedding_day")]
    WeddingDay,
}

impl EventCategory {
    /// Every category, in the order they are offered to users.
    pub const ALL: [EventCategory; 8] = [
        EventCategory::Venue,
        EventCategory::Catering,
        EventCategory::Attire,
        EventCategory::Photography,
        EventCategory::Flowers,
        EventCategory::Music,
        EventCategory::Planning,
        EventCategory::WeddingDay,
    ];

    /// Wire representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Venue => "venue",
            EventCategory::Catering => "catering",
            EventCategory::Attire => "attire",
            EventCategory::Photography => "photography",
            EventCategory::Flowers => "flowers",
            EventCategory::Music => "music",
            EventCategory::Planning => "planning",
            EventCategory::WeddingDay => "wedding-day",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Venue => "Venue",
            EventCategory::Catering => "Catering",
            EventCategory::Attire => "Attire",
            EventCategory::Photography => "Photography",
            EventCategory::Flowers => "Flowers",
            EventCategory::Music => "Music",
            EventCategory::Planning => "Planning",
            EventCategory::WeddingDay => "Wedding Day",
        }
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "venue" => Ok(EventCategory::Venue),
            "catering" => Ok(EventCategory::Catering),
            "attire" => Ok(EventCategory::Attire),
            "photography" => Ok(EventCategory::Photography),
            "flowers" => Ok(EventCategory::Flowers),
            "music" => Ok(EventCategory::Music),
            "planning" => Ok(EventCategory::Planning),
            "wedding-day" | "wedding_day" | "wedding" => Ok(EventCategory::WeddingDay),
            _ => Err(format!("Invalid event category: {s}")),
        }
    }
}
