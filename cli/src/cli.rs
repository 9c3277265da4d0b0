// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use agenda_core::{APP_NAME, EventStore};
use chrono::Local;
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;

use crate::config::parse_config;
use crate::logging::init_logging;
use crate::tui;

/// Run the agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the log file, overrides the configuration
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Record, filter and sort calendar events from your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/agenda/config.toml on Windows. Can also be set with $AGENDA_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(--"log-file" [LOG_FILE] "Write logs to this file")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Self {
        Cli {
            config: matches.get_one("config").cloned(),
            log_file: matches.get_one("log-file").cloned(),
        }
    }

    /// Load the configuration and run the agenda screen until the user exits
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        let (core_config, config) = parse_config(self.config).await?;

        let log_file = self.log_file.or(config.log_file);
        init_logging(log_file.as_deref(), config.log_level.as_deref())?;
        tracing::info!(version = crate_version!(), "starting agenda");

        let store = EventStore::from_config(&core_config);
        let today = Local::now().date_naive();
        let recorded = tui::run_agenda(store, today)?;

        tracing::info!(recorded, "agenda closed");
        Ok(())
    }
}
