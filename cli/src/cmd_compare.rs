// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::error::Error;

use caltime_core::TzZone;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::arg::{get_tz, get_value, parse_value, tz, value};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdCompare {
    pub a: String,
    pub b: String,
    pub date_only: bool,
    pub tz: Option<String>,
}

impl CmdCompare {
    pub const NAME: &str = "compare";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Compare two values, printing <, = or >")
            .arg(value("a", "The left-hand value"))
            .arg(value("b", "The right-hand value"))
            .arg(
                Arg::new("date-only")
                    .long("date-only")
                    .help("Compare the calendar dates only")
                    .action(ArgAction::SetTrue),
            )
            .arg(tz("tz", "Zone to compare the dates in, with --date-only").requires("date-only"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            a: get_value(matches, "a"),
            b: get_value(matches, "b"),
            date_only: matches.get_flag("date-only"),
            tz: get_tz(matches, "tz"),
        }
    }

    pub fn run(self, _config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "comparing values...");
        let a = parse_value(&self.a)?;
        let b = parse_value(&self.b)?;

        let ordering = match (self.date_only, &self.tz) {
            (true, Some(tzid)) => {
                let zone = TzZone::get(tzid)?;
                a.compare_date_only_tz(&b, Some(&zone))
            }
            (true, None) => a.compare_date_only(&b),
            (false, _) => a.compare(&b),
        };

        let symbol = match ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        Ok(format!("{} {symbol} {}", self.a, self.b))
    }
}
