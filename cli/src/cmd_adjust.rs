// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{get_offset, get_value, offset, parse_value, value, zone_label};
use crate::config::Config;

#[derive(Debug, Clone, Default)]
pub struct CmdAdjust {
    pub value: String,
    pub days: i32,
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl CmdAdjust {
    pub const NAME: &str = "adjust";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Shift a value by a duration, carrying into larger units")
            .long_about(
                "Shift a value by a duration, carrying into larger units. \
DATE values only move by whole days.",
            )
            .arg(value("value", "The value to shift"))
            .arg(offset("days", "Days to add"))
            .arg(offset("hours", "Hours to add"))
            .arg(offset("minutes", "Minutes to add"))
            .arg(offset("seconds", "Seconds to add"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            value: get_value(matches, "value"),
            days: get_offset(matches, "days"),
            hours: get_offset(matches, "hours"),
            minutes: get_offset(matches, "minutes"),
            seconds: get_offset(matches, "seconds"),
        }
    }

    pub fn run(self, _config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "adjusting value...");
        let t = parse_value(&self.value)?;
        let adjusted = t.adjust(self.days, self.hours, self.minutes, self.seconds);
        Ok(format!("{} ({})", adjusted.to_string().bold(), zone_label(&adjusted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjust(value: &str, days: i32, hours: i32, minutes: i32, seconds: i32) -> String {
        colored::control::set_override(false);
        let cmd = CmdAdjust {
            value: value.to_string(),
            days,
            hours,
            minutes,
            seconds,
        };
        cmd.run(&Config::default()).unwrap()
    }

    #[test]
    fn shifts_values() {
        #[rustfmt::skip]
        let cases = [
            ("20210131T230000Z", 0, 2, 0, 0,       "20210201T010000Z (UTC)"),
            ("20210131T230000",  1, 0, 0, 0,       "20210201T230000 (floating)"),
            ("20240228T120000",  0, 0, 0, 86_400,  "20240229T120000 (floating)"),
            ("20210301T000000",  0, 0, 0, -1,      "20210228T235959 (floating)"),
            ("20210101T000000",  -1, 0, 0, 0,      "20201231T000000 (floating)"),
            ("20210131",         1, 23, 0, 0,      "20210201 (floating)"),
        ];
        for (value, d, h, m, s, expected) in cases {
            assert_eq!(adjust(value, d, h, m, s), expected, "{value}");
        }
    }

    #[test]
    fn rejects_malformed_value() {
        let cmd = CmdAdjust {
            value: "2021013".to_string(),
            ..CmdAdjust::default()
        };
        assert!(cmd.run(&Config::default()).is_err());
    }
}
