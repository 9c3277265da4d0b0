// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use agenda_core::Event;

/// Shown in place of the event list when there is nothing to display.
pub const NO_MATCHING_EVENTS: &str = "No matching events.";

/// Shown in place of a missing description.
pub const NO_DESCRIPTION: &str = "No description";

/// Formats events as text blocks separated by blank lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventFormatter;

impl EventFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format<'a>(&'a self, events: &'a [Event]) -> Display<'a> {
        Display {
            events,
            _formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [Event],
    _formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.events.is_empty() {
            return write!(f, "{NO_MATCHING_EVENTS}");
        }

        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(
                f,
                "Title: {}\nDate: {}\nDescription: {}",
                event.title(),
                event.date(),
                event.description().unwrap_or(NO_DESCRIPTION)
            )?;
        }
        Ok(())
    }
}
