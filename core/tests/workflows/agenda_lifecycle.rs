// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Create, filter and sort a small agenda end to end.

use agenda_core::{SortKey, SortOrder};

use crate::common::{assert_dates, assert_titles, draft, sequential_store};

#[test]
fn two_events_sorted_by_title_and_date() {
    let mut store = sequential_store();
    store.create(draft("beta", "2025-01-02")).unwrap();
    store.create(draft("alpha", "2025-01-01")).unwrap();

    let by_title = store.sort(SortKey::Title, SortOrder::Asc);
    assert_titles(&by_title, &["Alpha", "Beta"]);

    let by_date = store.sort(SortKey::Date, SortOrder::Asc);
    assert_titles(&by_date, &["Alpha", "Beta"]);
    assert_dates(&by_date, &["2025-01-01", "2025-01-02"]);

    // store keeps insertion order throughout
    assert_titles(store.events(), &["Beta", "Alpha"]);
}

#[test]
fn rejected_creates_are_interleaved_without_effect() {
    let mut store = sequential_store();
    store.create(draft("gym", "2025-05-01")).unwrap();
    assert!(store.create(draft("", "2025-05-02")).is_err());
    store.create(draft("GROCERIES", "2025-05-03")).unwrap();
    assert!(store.create(draft("dentist", " ")).is_err());

    assert_titles(store.events(), &["Gym", "Groceries"]);
    let ids: Vec<_> = store.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_titles(&store.filter("G"), &["Gym", "Groceries"]);
}
