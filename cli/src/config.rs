// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use caltime_core::{TzZone, Weekday};

pub const APP_NAME: &str = "caltime";

const CALTIME_CONFIG_ENV: &str = "CALTIME_CONFIG";

/// Load the configuration.
///
/// The file is `path` if given, else `$CALTIME_CONFIG`, else
/// `caltime/config.toml` under the user's config directory. Only the last
/// may be absent, in which case the defaults apply.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALTIME_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            tracing::debug!("no user config directory, using defaults");
            return Ok(Config::default());
        };

        let config = config_dir.join(APP_NAME).join("config.toml");
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(Config::default());
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse()
        .map_err(|e| format!("Invalid config file at {}: {}", path.display(), e).into())
}

/// Configuration for the caltime application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Zone applied to floating input and to the current time, if set.
    pub zone: Option<TzZone>,

    /// First day of the week.
    pub first_day_of_week: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zone: None,
            first_day_of_week: Weekday::Sunday,
        }
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: ConfigRaw = toml::from_str(s)?;
        let zone = match raw.time.zone {
            Some(tzid) => Some(TzZone::get(&tzid)?),
            None => None,
        };
        let first_day_of_week = match raw.time.first_day_of_week {
            Some(day) => day.parse()?,
            None => Weekday::Sunday,
        };
        Ok(Self {
            zone,
            first_day_of_week,
        })
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigRaw {
    time: TimeConfigRaw,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TimeConfigRaw {
    zone: Option<String>,
    first_day_of_week: Option<String>,
}
