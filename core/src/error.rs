// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Reasons an event draft is rejected.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    /// The title is empty after trimming whitespace.
    #[error("event title must not be empty")]
    EmptyTitle,

    /// The date is empty after trimming whitespace.
    #[error("event date must not be empty")]
    EmptyDate,
}
