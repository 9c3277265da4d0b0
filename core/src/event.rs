// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::EventError;

/// A recorded calendar event.
///
/// Events are immutable once created, and can only be created through
/// [`EventStore::create`](crate::EventStore::create), which assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    id: String,
    title: String,
    date: String,
    description: Option<String>,
}

impl Event {
    /// The unique identifier for the event.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The normalized title of the event, never empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The date of the event, usually in `YYYY-MM-DD` form.
    ///
    /// It is kept as typed, dates are never parsed.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The description of the event, if available.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Draft for an event, holding the raw form input before validation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The title as typed.
    pub title: String,

    /// The date as typed or picked.
    pub date: String,

    /// The description as typed, empty means no description.
    pub description: String,
}

impl EventDraft {
    /// Creates a new draft from the three form fields.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            description: description.into(),
        }
    }

    /// Validates and normalizes the draft into an event with the given id.
    pub(crate) fn into_event(self, id: String) -> Result<Event, EventError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EventError::EmptyTitle);
        }

        let date = self.date.trim();
        if date.is_empty() {
            return Err(EventError::EmptyDate);
        }

        let description = match self.description.trim().is_empty() {
            true => None,
            false => Some(self.description),
        };

        Ok(Event {
            id,
            title: normalize_title(title),
            date: date.to_owned(),
            description,
        })
    }

    /// Checks whether [`EventStore::create`](crate::EventStore::create) would accept this draft.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            Err(EventError::EmptyTitle)
        } else if self.date.trim().is_empty() {
            Err(EventError::EmptyDate)
        } else {
            Ok(())
        }
    }
}

/// Normalizes a title: trims it, lowercases everything, then uppercases the first character.
pub fn normalize_title(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
