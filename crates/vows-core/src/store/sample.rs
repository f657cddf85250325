//! Sample wedding timeline used to seed new sessions.

use jiff::civil::{date, Date};

use crate::models::{EventCategory, EventStatus, TimelineEvent};

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    on: Date,
    time: &str,
    title: &str,
    location: &str,
    category: EventCategory,
    status: EventStatus,
    description: &str,
) -> TimelineEvent {
    TimelineEvent {
        id: id.to_string(),
        date: on,
        time: time.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        category,
        status,
        description: Some(description.to_string()),
    }
}

/// The five milestones every new timeline starts with.
pub fn sample_timeline() -> Vec<TimelineEvent> {
    vec![
        event(
            "1",
            date(2024, 2, 15),
            "10:00 AM",
            "Venue Site Visit",
            "The Grand Ballroom",
            EventCategory::Venue,
            EventStatus::Completed,
            "Final walkthrough of the ceremony and reception spaces",
        ),
        event(
            "2",
            date(2024, 3, 1),
            "2:00 PM",
            "Cake Tasting",
            "Sweet Dreams Bakery",
            EventCategory::Catering,
            EventStatus::Upcoming,
            "Tasting different cake flavors and discussing design options",
        ),
        event(
            "3",
            date(2024, 3, 15),
            "11:00 AM",
            "Dress Fitting",
            "Elegant Bridal",
            EventCategory::Attire,
            EventStatus::Upcoming,
            "Final dress fitting and alterations",
        ),
        event(
            "4",
            date(2024, 4, 1),
            "3:00 PM",
            "Photographer Meeting",
            "Studio Downtown",
            EventCategory::Photography,
            EventStatus::Upcoming,
            "Engagement shoot and wedding day timeline discussion",
        ),
        event(
            "5",
            date(2024, 6, 15),
            "4:00 PM",
            "Wedding Day",
            "The Grand Ballroom",
            EventCategory::WeddingDay,
            EventStatus::Upcoming,
            "The big day! Ceremony at 4 PM, reception to follow",
        ),
    ]
}
