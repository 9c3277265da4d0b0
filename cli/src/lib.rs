// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end of the agenda application.

mod cli;
mod config;
mod event_formatter;
mod logging;
mod tui;
mod util;

pub use crate::cli::{Cli, run};
pub use crate::config::{Config, parse_config};
pub use crate::event_formatter::{EventFormatter, NO_DESCRIPTION, NO_MATCHING_EVENTS};
