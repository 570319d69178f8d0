// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write;

use caltime_core::{TimeValue, Weekday};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{
    as_zone, get_tz, get_value, localize, parse_value, resolve_zone, tz, value, zone_label,
};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdShow {
    pub value: String,
    pub tz: Option<String>,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the fields and calendar properties of a value")
            .arg(value("value", "The value to show"))
            .arg(tz("tz", "Zone for a floating value, defaults to the configured zone"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            value: get_value(matches, "value"),
            tz: get_tz(matches, "tz"),
        }
    }

    pub fn run(self, config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "showing value...");
        let zone = resolve_zone(self.tz.as_deref(), config)?;
        let t = localize(parse_value(&self.value)?, as_zone(zone.as_ref()));
        Ok(render(&t, config.first_day_of_week)?)
    }
}

fn render(t: &TimeValue<'_>, first: Weekday) -> Result<String, std::fmt::Error> {
    let kind = if t.is_date() { "DATE" } else { "DATE-TIME" };

    let mut out = String::new();
    writeln!(out, "{} {} ({kind}, {})", "Value:".bold(), t, zone_label(t))?;
    writeln!(
        out,
        "{} year={} month={} day={} hour={} minute={} second={}",
        "Fields:".bold(),
        t.year,
        t.month,
        t.day,
        t.hour,
        t.minute,
        t.second
    )?;
    writeln!(out, "{} {}", "Valid:".bold(), t.is_valid_time())?;
    writeln!(out, "{} {}", "Null:".bold(), t.is_null_time())?;
    writeln!(out, "{} {}", "Normalized:".bold(), t.normalize())?;
    writeln!(out, "{} {}", "Day of year:".bold(), t.day_of_year())?;
    writeln!(out, "{} {}", "Weekday:".bold(), t.day_of_week())?;
    writeln!(
        out,
        "{} {} ({first})",
        "Start of week:".bold(),
        t.start_day_of_week(first)
    )?;
    writeln!(out, "{} {}", "Week:".bold(), t.week_number())?;
    write!(out, "{} {}", "UTC epoch:".bold(), t.as_utc_epoch_seconds())?;
    Ok(out)
}
