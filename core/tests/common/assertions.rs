// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use agenda_core::Event;

/// Asserts the titles of the events, in order.
pub fn assert_titles(events: &[Event], expected: &[&str]) {
    let titles: Vec<_> = events.iter().map(Event::title).collect();
    assert_eq!(titles, expected, "Title sequence mismatch");
}

/// Asserts the dates of the events, in order.
pub fn assert_dates(events: &[Event], expected: &[&str]) {
    let dates: Vec<_> = events.iter().map(Event::date).collect();
    assert_eq!(dates, expected, "Date sequence mismatch");
}
