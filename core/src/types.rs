// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// The field events are sorted by.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by the date string.
    #[default]
    Date,

    /// Sort by the title string.
    Title,
}

impl SortKey {
    /// All keys, in the order they are offered to the user.
    pub const ALL: [SortKey; 2] = [SortKey::Date, SortKey::Title];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "Date"),
            SortKey::Title => write!(f, "Title"),
        }
    }
}

/// Sort order, either ascending or descending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,

    /// Descending order.
    Desc,
}

impl SortOrder {
    /// All orders, in the order they are offered to the user.
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "Ascending"),
            SortOrder::Desc => write!(f, "Descending"),
        }
    }
}
