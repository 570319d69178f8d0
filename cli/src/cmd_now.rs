// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltime_core::TimeValue;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{as_zone, date, get_date, get_tz, resolve_zone, tz, zone_label};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdNow {
    pub tz: Option<String>,
    pub date: bool,
}

impl CmdNow {
    pub const NAME: &str = "now";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the current time")
            .arg(tz("tz", "Zone to show the time in, defaults to the configured zone"))
            .arg(date())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            tz: get_tz(matches, "tz"),
            date: get_date(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "reading current time...");
        let zone = resolve_zone(self.tz.as_deref(), config)?;
        let now = match (self.date, as_zone(zone.as_ref())) {
            (true, None) => TimeValue::today(),
            (true, zone) => {
                let instant = TimeValue::current_time(zone).as_utc_epoch_seconds();
                TimeValue::from_epoch_seconds(instant, true, zone)
            }
            (false, zone) => TimeValue::current_time(zone),
        };
        Ok(format!("{} ({})", now.to_string().bold(), zone_label(&now)))
    }
}
