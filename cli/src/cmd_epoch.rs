// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltime_core::TimeValue;
use clap::{Arg, ArgMatches, Command, value_parser};
use colored::Colorize;

use crate::arg::{as_zone, date, get_date, get_tz, resolve_zone, tz, zone_label};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdEpoch {
    pub seconds: i64,
    pub tz: Option<String>,
    pub date: bool,
}

impl CmdEpoch {
    pub const NAME: &str = "epoch";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Build a value from seconds since the UNIX epoch")
            .arg(
                Arg::new("seconds")
                    .value_name("SECONDS")
                    .help("Seconds since 1970-01-01T00:00:00Z")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .required(true),
            )
            .arg(tz("tz", "Zone of the result, defaults to the configured zone"))
            .arg(date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            seconds: matches.get_one::<i64>("seconds").copied().unwrap_or(0),
            tz: get_tz(matches, "tz"),
            date: get_date(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "building value from epoch seconds...");
        let zone = resolve_zone(self.tz.as_deref(), config)?;
        let t = TimeValue::from_epoch_seconds(self.seconds, self.date, as_zone(zone.as_ref()));

        let mut out = format!("{} ({})", t.to_string().bold(), zone_label(&t));
        if t.is_daylight {
            out.push_str(" DST");
        }
        Ok(out)
    }
}
