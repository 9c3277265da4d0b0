// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the event store.
//!
//! Tests creating events and deriving filtered and sorted views.

mod create;
mod filter;
mod sort;
