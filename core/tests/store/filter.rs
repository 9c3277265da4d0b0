// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::common::{assert_titles, sequential_store, store_with};

#[test]
fn filter_empty_pattern_returns_everything_in_order() {
    let store = store_with(&[
        ("zeta", "2025-01-03"),
        ("alpha", "2025-01-01"),
        ("mu", "2025-01-02"),
    ]);

    let all = store.filter("");
    assert_eq!(all, store.events());
}

#[test]
fn filter_is_case_insensitive() {
    let store = store_with(&[("Meeting", "2025-01-01"), ("Lunch", "2025-01-01")]);

    assert_titles(&store.filter("meet"), &["Meeting"]);
    assert_titles(&store.filter("MEET"), &["Meeting"]);
}

#[test]
fn filter_matches_anywhere_in_title() {
    let store = store_with(&[
        ("team meeting", "2025-01-01"),
        ("meeting notes", "2025-01-02"),
        ("lunch", "2025-01-03"),
    ]);

    assert_titles(&store.filter("meeting"), &["Team meeting", "Meeting notes"]);
}

#[test]
fn filter_does_not_mutate_store() {
    let store = store_with(&[("b", "2025-01-01"), ("a", "2025-01-02")]);

    let _ = store.filter("a");
    assert_titles(store.events(), &["B", "A"]);
}

#[test]
fn filter_on_empty_store_is_empty() {
    let store = sequential_store();
    assert!(store.filter("x").is_empty());
    assert!(store.filter("").is_empty());
}
