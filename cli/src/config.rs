// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use agenda_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

const AGENDA_CONFIG_ENV: &str = "AGENDA_CONFIG";

/// Resolves and loads the configuration.
///
/// Lookup order: the given path, then `$AGENDA_CONFIG`, then the user config
/// directory. Only the last one may be missing, in which case defaults apply.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(AGENDA_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::warn!("{e}, using default configuration");
                return Ok(Default::default());
            }
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Default::default());
        }
        config
    };

    tracing::debug!(path = %path.display(), "reading config");
    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    let mut config = raw.tui;
    config.normalize()?;
    Ok((raw.core, config))
}

/// Configuration for the terminal front end.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File to write logs to. Logging is disabled without one.
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset, e.g. `"debug"`.
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(log_file) = &self.log_file {
            self.log_file = Some(
                expand_path(log_file)
                    .map_err(|e| format!("Failed to expand log file path: {e}"))?,
            );
        }
        Ok(())
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    tui: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Handle a leading tilde or home variable in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            let home = dirs::home_dir().ok_or("User-specific home directory not found")?;
            return Ok(home.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
