// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write;

use caltime_core::{TimeSpan, TimeValue, Zone};
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{as_zone, get_tz, get_value, localize, parse_value, resolve_zone, tz, value};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct CmdSpan {
    pub start1: String,
    pub end1: String,
    pub start2: String,
    pub end2: String,
    pub tz: Option<String>,
}

impl CmdSpan {
    pub const NAME: &str = "span";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check two spans for overlap and containment")
            .arg(value("start1", "Start of the first span"))
            .arg(value("end1", "End of the first span, exclusive"))
            .arg(value("start2", "Start of the second span"))
            .arg(value("end2", "End of the second span, exclusive"))
            .arg(tz("tz", "Zone for floating values, defaults to the configured zone"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            start1: get_value(matches, "start1"),
            end1: get_value(matches, "end1"),
            start2: get_value(matches, "start2"),
            end2: get_value(matches, "end2"),
            tz: get_tz(matches, "tz"),
        }
    }

    pub fn run(self, config: &Config) -> Result<String, Box<dyn Error>> {
        tracing::debug!(?self, "checking spans...");
        let zone = resolve_zone(self.tz.as_deref(), config)?;
        let zone = as_zone(zone.as_ref());

        let first = span(&self.start1, &self.end1, zone)?;
        let second = span(&self.start2, &self.end2, zone)?;
        Ok(render(&first, &second)?)
    }
}

fn span(start: &str, end: &str, zone: Option<&dyn Zone>) -> Result<TimeSpan, Box<dyn Error>> {
    let start: TimeValue<'_> = localize(parse_value(start)?, zone);
    let end: TimeValue<'_> = localize(parse_value(end)?, zone);
    Ok(TimeSpan::new(&start, &end, true))
}

fn render(first: &TimeSpan, second: &TimeSpan) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for (label, span) in [("First:", first), ("Second:", second)] {
        writeln!(
            out,
            "{} [{}, {}) {}s",
            label.bold(),
            span.start,
            span.end,
            span.duration()
        )?;
    }
    writeln!(out, "{} {}", "Overlaps:".bold(), first.overlaps(second))?;
    writeln!(out, "{} {}", "First contains second:".bold(), first.contains(second))?;
    write!(out, "{} {}", "Second contains first:".bold(), second.contains(first))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(values: [&str; 4], tz: Option<&str>) -> String {
        colored::control::set_override(false);
        let [start1, end1, start2, end2] = values.map(str::to_string);
        let cmd = CmdSpan {
            start1,
            end1,
            start2,
            end2,
            tz: tz.map(str::to_string),
        };
        cmd.run(&Config::default()).unwrap()
    }

    #[test]
    fn reports_overlap_and_containment() {
        let out = check(
            ["20210201T090000Z", "20210201T120000Z", "20210201T100000Z", "20210201T110000Z"],
            None,
        );
        assert!(out.contains("First: [1612170000, 1612180800) 10800s"));
        assert!(out.contains("Overlaps: true"));
        assert!(out.contains("First contains second: true"));
        assert!(out.contains("Second contains first: false"));
    }

    #[test]
    fn adjacent_days_do_not_overlap() {
        let out = check(["20210201", "20210202", "20210202", "20210203"], None);
        assert!(out.contains("First: [1612137600, 1612224000) 86400s"));
        assert!(out.contains("Overlaps: false"));
        assert!(out.contains("First contains second: false"));
    }

    #[test]
    fn places_floating_values_in_zone() {
        // 09:00-10:00 in Tokyo is 00:00-01:00 UTC
        let out = check(
            ["20210201T090000", "20210201T100000", "20210201T000000Z", "20210201T010000Z"],
            Some("Asia/Tokyo"),
        );
        assert!(out.contains("Overlaps: true"));
        assert!(out.contains("First contains second: true"));
        assert!(out.contains("Second contains first: true"));
    }
}
