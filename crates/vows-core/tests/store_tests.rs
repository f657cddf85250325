use jiff::civil::date;
use vows_core::{
    display::EventList, EventDraft, EventStatus, EventStore, EventStoreBuilder, TimelineError,
};

/// Helper function to create an empty store
fn create_empty_store() -> EventStore {
    EventStoreBuilder::new()
        .build()
        .expect("Failed to create store")
}

#[test]
fn test_complete_timeline_workflow() {
    let mut store = create_empty_store();
    assert!(store.is_empty());

    // Add events out of order
    let cake = store
        .add_event(&EventDraft::new("Cake Tasting", "Bakery", "2024-03-01"))
        .expect("Failed to add event");
    let venue = store
        .add_event(&EventDraft::new("Venue Visit", "Hall", "2024-02-15"))
        .expect("Failed to add event");

    // Listing is ordered by date
    let events = store.list_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Venue Visit");
    assert_eq!(events[0].date, date(2024, 2, 15));
    assert_eq!(events[1].title, "Cake Tasting");
    assert_eq!(events[1].date, date(2024, 3, 1));
    assert_ne!(cake.id, venue.id);

    // Complete the venue visit, then reopen it
    let toggled = store.toggle_status(&venue.id).expect("Failed to toggle");
    assert_eq!(toggled.status, EventStatus::Completed);
    let toggled = store.toggle_status(&venue.id).expect("Failed to toggle");
    assert_eq!(toggled.status, EventStatus::Upcoming);

    // Rendering follows the same order
    let output = EventList::with_title(store.list_events(), "Wedding Timeline").to_string();
    let venue_pos = output.find("Venue Visit").unwrap();
    let cake_pos = output.find("Cake Tasting").unwrap();
    assert!(venue_pos < cake_pos);
}

#[test]
fn test_completed_event_toggles_to_upcoming_and_back() {
    let mut store = EventStoreBuilder::new()
        .with_sample_timeline(true)
        .build()
        .unwrap();

    assert_eq!(store.get_event("1").unwrap().status, EventStatus::Completed);
    assert_eq!(store.toggle_status("1").unwrap().status, EventStatus::Upcoming);
    assert_eq!(store.toggle_status("1").unwrap().status, EventStatus::Completed);
}

#[test]
fn test_rejected_draft_does_not_change_store() {
    let mut store = create_empty_store();
    store
        .add_event(&EventDraft::new("Venue Visit", "Hall", "2024-02-15"))
        .unwrap();

    let today = jiff::Zoned::now().date().to_string();
    let result = store.add_event(&EventDraft::new("", "X", today));

    assert!(matches!(result, Err(TimelineError::Validation { .. })));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_toggle_unknown_event() {
    let mut store = create_empty_store();
    store
        .add_event(&EventDraft::new("Venue Visit", "Hall", "2024-02-15"))
        .unwrap();
    let before = store.list_events().to_vec();

    let result = store.toggle_status("nonexistent-id");

    assert!(matches!(result, Err(TimelineError::NotFound { .. })));
    assert_eq!(store.list_events(), before.as_slice());
}

#[test]
fn test_added_events_interleave_with_sample_timeline() {
    let mut store = EventStoreBuilder::new()
        .with_sample_timeline(true)
        .build()
        .unwrap();

    let draft = EventDraft {
        category: Some("flowers".to_string()),
        ..EventDraft::new("Florist Consultation", "Petal & Stem", "2024-03-15")
    };
    let florist = store.add_event(&draft).unwrap();

    let titles: Vec<&str> = store
        .list_events()
        .iter()
        .map(|event| event.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Venue Site Visit",
            "Cake Tasting",
            "Dress Fitting",
            "Florist Consultation",
            "Photographer Meeting",
            "Wedding Day"
        ]
    );
    assert_eq!(store.get_event(&florist.id).unwrap().time, "12:00 PM");
}
