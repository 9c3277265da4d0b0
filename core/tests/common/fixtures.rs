// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use agenda_core::{EventDraft, EventStore, SequentialGenerator};

/// Creates an empty store with ids `"1"`, `"2"`, ...
#[must_use]
pub fn sequential_store() -> EventStore {
    EventStore::new(Box::new(SequentialGenerator::new()))
}

/// Creates a draft with an empty description.
#[must_use]
pub fn draft(title: &str, date: &str) -> EventDraft {
    EventDraft::new(title, date, "")
}

/// Creates a sequential store holding the given `(title, date)` events, in order.
///
/// # Panics
///
/// Panics if any of the pairs is rejected by the store.
#[must_use]
pub fn store_with(events: &[(&str, &str)]) -> EventStore {
    let mut store = sequential_store();
    for (title, date) in events {
        store
            .create(draft(title, date))
            .expect("fixture event should be valid");
    }
    store
}
