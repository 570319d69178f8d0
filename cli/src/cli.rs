// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{Arg, ArgMatches, Command, ValueHint, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_adjust::CmdAdjust;
use crate::cmd_compare::CmdCompare;
use crate::cmd_convert::CmdConvert;
use crate::cmd_epoch::CmdEpoch;
use crate::cmd_now::CmdNow;
use crate::cmd_show::CmdShow;
use crate::cmd_span::CmdSpan;
use crate::config::{APP_NAME, Config, parse_config};

/// Run the caltime command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse()?;
    if let Err(e) = cli.run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
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
            .about("Inspect, convert and compare iCalendar dates and date-times.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("CONFIG")
                    .help("Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $CALTIME_CONFIG, then caltime/config.toml under the \
user's config directory ($XDG_CONFIG_HOME on Linux, ~/Library/Application Support on MacOS, \
%APPDATA% on Windows).",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdNow::command())
            .subcommand(CmdConvert::command())
            .subcommand(CmdAdjust::command())
            .subcommand(CmdCompare::command())
            .subcommand(CmdSpan::command())
            .subcommand(CmdEpoch::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdNow::NAME, matches)) => Now(CmdNow::from(matches)),
            Some((CmdConvert::NAME, matches)) => Convert(CmdConvert::from(matches)),
            Some((CmdAdjust::NAME, matches)) => Adjust(CmdAdjust::from(matches)),
            Some((CmdCompare::NAME, matches)) => Compare(CmdCompare::from(matches)),
            Some((CmdSpan::NAME, matches)) => Span(CmdSpan::from(matches)),
            Some((CmdEpoch::NAME, matches)) => Epoch(CmdEpoch::from(matches)),
            _ => return Err("A subcommand is required".into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config)?;
        self.command.run(&config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the fields and calendar properties of a value
    Show(CmdShow),

    /// Show the current time
    Now(CmdNow),

    /// Convert a value into another zone
    Convert(CmdConvert),

    /// Shift a value by a duration
    Adjust(CmdAdjust),

    /// Compare two values
    Compare(CmdCompare),

    /// Check two spans for overlap and containment
    Span(CmdSpan),

    /// Build a value from epoch seconds
    Epoch(CmdEpoch),
}

impl Commands {
    /// Run the command with the given configuration
    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        let output = match self {
            Show(a) => a.run(config)?,
            Now(a) => a.run(config)?,
            Convert(a) => a.run(config)?,
            Adjust(a) => a.run(config)?,
            Compare(a) => a.run(config)?,
            Span(a) => a.run(config)?,
            Epoch(a) => a.run(config)?,
        };
        println!("{output}");
        Ok(())
    }
}
