// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::SortOrder;

use crate::common::{assert_dates, assert_titles, sequential_store, store_with};

#[test]
fn sort_by_date_descending_reverses_ascending() {
    let store = store_with(&[
        ("c", "2025-03-01"),
        ("a", "2025-01-01"),
        ("d", "2025-04-01"),
        ("b", "2025-02-01"),
    ]);

    let asc = store.sort_by_date(SortOrder::Asc);
    let mut desc = store.sort_by_date(SortOrder::Desc);
    desc.reverse();
    assert_eq!(asc, desc);
    assert_dates(&asc, &["2025-01-01", "2025-02-01", "2025-03-01", "2025-04-01"]);
}

#[test]
fn sort_by_title_both_directions() {
    let store = store_with(&[("beta", "1"), ("gamma", "2"), ("alpha", "3")]);

    assert_titles(&store.sort_by_title(SortOrder::Asc), &["Alpha", "Beta", "Gamma"]);
    assert_titles(&store.sort_by_title(SortOrder::Desc), &["Gamma", "Beta", "Alpha"]);
}

#[test]
fn sort_never_mutates_store() {
    let store = store_with(&[("beta", "2025-01-02"), ("alpha", "2025-01-01")]);

    let _ = store.sort_by_date(SortOrder::Asc);
    let _ = store.sort_by_title(SortOrder::Desc);
    assert_titles(&store.filter(""), &["Beta", "Alpha"]);
}

#[test]
fn sort_by_date_is_lexicographic() {
    let store = store_with(&[("unpadded", "2025-3-1"), ("padded", "2025-12-01")]);

    // "2025-1" < "2025-3" as strings, whatever the calendar says
    assert_titles(&store.sort_by_date(SortOrder::Asc), &["Padded", "Unpadded"]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let store = store_with(&[
        ("one", "2025-01-01"),
        ("two", "2025-01-01"),
        ("three", "2025-01-01"),
    ]);

    assert_titles(&store.sort_by_date(SortOrder::Asc), &["One", "Two", "Three"]);
    assert_titles(&store.sort_by_date(SortOrder::Desc), &["One", "Two", "Three"]);
}

#[test]
fn sort_on_empty_store_is_empty() {
    let store = sequential_store();
    assert!(store.sort_by_date(SortOrder::Asc).is_empty());
    assert!(store.sort_by_title(SortOrder::Desc).is_empty());
}
