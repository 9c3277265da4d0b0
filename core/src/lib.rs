// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the agenda application: the event model and the in-memory event store.

mod config;
mod error;
mod event;
mod id;
mod store;
mod types;

pub use crate::config::{APP_NAME, Config};
pub use crate::error::EventError;
pub use crate::event::{Event, EventDraft, normalize_title};
pub use crate::id::{IdGenerator, IdGeneratorKind, SequentialGenerator, UuidGenerator};
pub use crate::store::EventStore;
pub use crate::types::{SortKey, SortOrder};
