// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use caltime_core::{TimeValue, TzZone, Zone, ZoneError};
use clap::{Arg, ArgAction, ArgMatches, value_parser};

use crate::config::Config;

/// A required positional DATE or DATE-TIME in iCalendar basic format.
pub fn value(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .value_name("VALUE")
        .help(help)
        .long_help(format!(
            "{help}, in iCalendar basic format: YYYYMMDD, YYYYMMDDTHHMMSS, or YYYYMMDDTHHMMSSZ for UTC"
        ))
        .required(true)
}

pub fn get_value(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

/// Parse a value given on the command line.
pub fn parse_value(text: &str) -> Result<TimeValue<'static>, Box<dyn Error>> {
    Ok(TimeValue::parse(text)?)
}

/// An optional `--<id> <TZID>` option.
pub fn tz(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).value_name("TZID").help(help)
}

pub fn get_tz(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

/// An `--<id> <N>` offset that may be negative, defaulting to 0.
pub fn offset(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("N")
        .help(help)
        .value_parser(value_parser!(i32))
        .allow_negative_numbers(true)
        .default_value("0")
}

pub fn get_offset(matches: &ArgMatches, id: &str) -> i32 {
    matches.get_one::<i32>(id).copied().unwrap_or(0)
}

pub fn date() -> Arg {
    Arg::new("date")
        .long("date")
        .help("Produce a DATE instead of a DATE-TIME")
        .action(ArgAction::SetTrue)
}

pub fn get_date(matches: &ArgMatches) -> bool {
    matches.get_flag("date")
}

/// Look up `tzid`, falling back to the configured zone.
pub fn resolve_zone(tzid: Option<&str>, config: &Config) -> Result<Option<TzZone>, ZoneError> {
    match tzid {
        Some(tzid) => TzZone::get(tzid).map(Some),
        None => Ok(config.zone.clone()),
    }
}

pub fn as_zone(zone: Option<&TzZone>) -> Option<&dyn Zone> {
    match zone {
        Some(zone) => Some(zone),
        None => None,
    }
}

/// Put a floating value into `zone`; zoned values keep their own zone.
pub fn localize<'z>(value: TimeValue<'z>, zone: Option<&'z dyn Zone>) -> TimeValue<'z> {
    if value.is_floating() {
        value.set_timezone(zone)
    } else {
        value
    }
}

/// Name of the zone a value is in.
pub fn zone_label(value: &TimeValue<'_>) -> String {
    match value.tzid() {
        _ if value.is_utc() => "UTC".to_string(),
        Some(tzid) => tzid.to_string(),
        None => "floating".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use caltime_core::UTC;
    use clap::Command;

    use super::*;

    fn command() -> Command {
        Command::new("test")
            .arg(value("value", "A value"))
            .arg(tz("tz", "A zone"))
            .arg(offset("days", "Days"))
            .arg(date())
    }

    #[test]
    fn parses_shared_arguments() {
        let matches = command()
            .try_get_matches_from([
                "test",
                "20210131",
                "--tz",
                "Asia/Tokyo",
                "--days",
                "-3",
                "--date",
            ])
            .unwrap();
        assert_eq!(get_value(&matches, "value"), "20210131");
        assert_eq!(get_tz(&matches, "tz"), Some("Asia/Tokyo".to_string()));
        assert_eq!(get_offset(&matches, "days"), -3);
        assert!(get_date(&matches));
    }

    #[test]
    fn applies_defaults() {
        let matches = command().try_get_matches_from(["test", "20210131"]).unwrap();
        assert_eq!(get_tz(&matches, "tz"), None);
        assert_eq!(get_offset(&matches, "days"), 0);
        assert!(!get_date(&matches));
    }

    #[test]
    fn requires_value() {
        assert!(command().try_get_matches_from(["test"]).is_err());
    }

    #[test]
    fn resolves_zone_with_fallback() {
        let config = Config {
            zone: Some(TzZone::get("Europe/Berlin").unwrap()),
            ..Config::default()
        };

        let zone = resolve_zone(Some("Asia/Tokyo"), &config).unwrap();
        assert_eq!(zone.unwrap().tzid(), Some("Asia/Tokyo"));

        let zone = resolve_zone(None, &config).unwrap();
        assert_eq!(zone.unwrap().tzid(), Some("Europe/Berlin"));

        assert!(resolve_zone(None, &Config::default()).unwrap().is_none());
        assert!(resolve_zone(Some("Nowhere/Special"), &config).is_err());
    }

    #[test]
    fn localizes_only_floating_values() {
        let berlin = TzZone::get("Europe/Berlin").unwrap();

        let floating = parse_value("20210131T230000").unwrap();
        let localized = localize(floating, Some(&berlin));
        assert_eq!(zone_label(&localized), "Europe/Berlin");

        let utc = parse_value("20210131T230000Z").unwrap();
        assert_eq!(zone_label(&localize(utc, Some(&berlin))), "UTC");
        assert_eq!(zone_label(&floating), "floating");
        assert_eq!(zone_label(&floating.set_timezone(Some(&UTC))), "UTC");
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(parse_value("2021-01-31").is_err());
    }
}
