// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_dates, assert_titles};
#[allow(unused_imports)]
pub use fixtures::{draft, sequential_store, store_with};
