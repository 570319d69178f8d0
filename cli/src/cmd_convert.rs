// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltime_core::TzZone;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{
    as_zone, get_tz, get_value, localize, parse_value, resolve_zone, tz, value, zone_label,
};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdConvert {
    pub value: String,
    pub from: Option<String>,
    pub to: String,
}

impl CmdConvert {
    pub const NAME: &str = "convert";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert a value into another zone")
            .arg(value("value", "The value to convert"))
            .arg(tz("from", "Zone of a floating value, defaults to the configured zone"))
            .arg(tz("to", "Zone to convert into").required(true))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            value: get_value(matches, "value"),
            from: get_tz(matches, "from"),
            to: get_tz(matches, "to").unwrap_or_default(),
        }
    }

    pub fn run(self, config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "converting value...");
        let from = resolve_zone(self.from.as_deref(), config)?;
        let to = TzZone::get(&self.to)?;

        let t = localize(parse_value(&self.value)?, as_zone(from.as_ref()));
        let converted = t.convert_to_zone(Some(&to));
        tracing::debug!(from = %t, to = %converted, "converted");

        let mut out = format!("{} ({})", converted.to_string().bold(), zone_label(&converted));
        if converted.is_daylight {
            out.push_str(" DST");
        }
        Ok(out)
    }
}
