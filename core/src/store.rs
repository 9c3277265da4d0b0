// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use crate::{Config, Event, EventDraft, EventError, IdGenerator, SortKey, SortOrder};

/// In-memory, insertion-ordered collection of events.
///
/// The store only grows. Filtering and sorting return derived sequences and
/// never reorder the store itself.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    ids: Box<dyn IdGenerator>,
}

impl EventStore {
    /// Creates an empty store drawing ids from the given generator.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            events: Vec::new(),
            ids,
        }
    }

    /// Creates an empty store as configured.
    pub fn from_config(config: &Config) -> Self {
        tracing::debug!(id_generator = ?config.id_generator, "creating event store");
        Self::new(config.id_generator.build())
    }

    /// Validates the draft, assigns an id and appends the new event.
    ///
    /// Nothing is appended, and no id is consumed, if the draft is rejected.
    pub fn create(&mut self, draft: EventDraft) -> Result<&Event, EventError> {
        draft.validate()?;
        let id = self.ids.generate_id();
        let event = draft.into_event(id)?;
        tracing::debug!(id = event.id(), title = event.title(), "event created");

        self.events.push(event);
        let len = self.events.len();
        Ok(&self.events[len - 1])
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Iterates over the events in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    /// Number of events in the store.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the store holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose title contains `pattern`, ignoring case, in insertion order.
    ///
    /// An empty pattern matches every event.
    pub fn filter(&self, pattern: &str) -> Vec<Event> {
        let pattern = pattern.to_lowercase();
        self.events
            .iter()
            .filter(|e| e.title().to_lowercase().contains(&pattern))
            .cloned()
            .collect()
    }

    /// Events sorted by the given key and order.
    pub fn sort(&self, key: SortKey, order: SortOrder) -> Vec<Event> {
        match key {
            SortKey::Date => self.sort_by_date(order),
            SortKey::Title => self.sort_by_title(order),
        }
    }

    /// Events sorted by their date strings.
    ///
    /// The comparison is plain string comparison, so `2025-3-1` sorts after
    /// `2025-12-01`. Ties keep insertion order.
    pub fn sort_by_date(&self, order: SortOrder) -> Vec<Event> {
        self.sorted_by(order, |a, b| a.date().cmp(b.date()))
    }

    /// Events sorted by their titles. Ties keep insertion order.
    pub fn sort_by_title(&self, order: SortOrder) -> Vec<Event> {
        self.sorted_by(order, |a, b| a.title().cmp(b.title()))
    }

    fn sorted_by(&self, order: SortOrder, cmp: impl Fn(&Event, &Event) -> Ordering) -> Vec<Event> {
        let mut events = self.events.clone();
        match order {
            SortOrder::Asc => events.sort_by(|a, b| cmp(a, b)),
            SortOrder::Desc => events.sort_by(|a, b| cmp(b, a)),
        }
        events
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
