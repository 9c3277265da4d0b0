// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber writing to `log_file`.
///
/// The TUI owns the terminal, so nothing is installed without a log file.
/// `RUST_LOG` takes precedence over `level`. Returns whether a subscriber was installed.
pub fn init_logging(log_file: Option<&Path>, level: Option<&str>) -> Result<bool, Box<dyn Error>> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL))
            .map_err(|e| format!("Invalid log level: {e}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {e}"))?;

    Ok(true)
}
