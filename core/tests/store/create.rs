// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use agenda_core::{Event, EventDraft, EventError, EventStore, UuidGenerator};

use crate::common::{assert_titles, draft, sequential_store};

#[test]
fn create_with_empty_title_adds_nothing() {
    let mut store = sequential_store();

    let err = store.create(draft("", "2025-01-01")).unwrap_err();
    assert_eq!(err, EventError::EmptyTitle);
    assert!(store.is_empty());
}

#[test]
fn create_with_empty_date_adds_nothing() {
    let mut store = sequential_store();

    let err = store.create(draft("Dentist", "")).unwrap_err();
    assert_eq!(err, EventError::EmptyDate);
    assert!(store.is_empty());
}

#[test]
fn create_with_whitespace_fields_adds_nothing() {
    let mut store = sequential_store();

    assert!(store.create(draft("   ", "2025-01-01")).is_err());
    assert!(store.create(draft("Dentist", "  \t ")).is_err());
    assert_eq!(store.len(), 0);
}

#[test]
fn create_trims_and_normalizes_title() {
    let mut store = sequential_store();

    let event = store.create(draft("  hello world  ", "2025-01-01")).unwrap();
    assert_eq!(event.title(), "Hello world");
}

#[test]
fn create_treats_blank_description_as_absent() {
    let mut store = sequential_store();

    let empty = store.create(EventDraft::new("a", "2025-01-01", "")).unwrap();
    assert_eq!(empty.description(), None);

    let blank = store.create(EventDraft::new("b", "2025-01-01", "  \n")).unwrap();
    assert_eq!(blank.description(), None);
}

#[test]
fn create_keeps_description() {
    let mut store = sequential_store();

    let event = store
        .create(EventDraft::new("a", "2025-01-01", "Room 42"))
        .unwrap();
    assert_eq!(event.description(), Some("Room 42"));
}

#[test]
fn create_many_keeps_creation_order_with_distinct_ids() {
    const N: usize = 50;
    let mut store = EventStore::new(Box::new(UuidGenerator));
    for i in 0..N {
        store.create(draft(&format!("event {i}"), "2025-01-01")).unwrap();
    }

    assert_eq!(store.len(), N);
    let ids: HashSet<_> = store.iter().map(Event::id).collect();
    assert_eq!(ids.len(), N);

    let expected: Vec<_> = (0..N).map(|i| format!("Event {i}")).collect();
    let expected: Vec<_> = expected.iter().map(String::as_str).collect();
    assert_titles(store.events(), &expected);
}

#[test]
fn created_event_serializes_with_optional_description() {
    let mut store = sequential_store();
    let event = store.create(draft("standup", "2025-04-01")).unwrap();

    let json = serde_json::to_value(event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "1",
            "title": "Standup",
            "date": "2025-04-01",
            "description": null,
        })
    );
}
