// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Proleptic Gregorian calendar arithmetic.
//!
//! These are pure functions over `(year, month, day)` triples and know
//! nothing about time zones. Months are 1-based, days of the year are
//! 1-based (January 1st is day 1).

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ParseError;
use crate::keyword::{KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE};

/// Days between 0000-03-01 and 1970-01-01.
const UNIX_EPOCH_DAYS: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Day of the week, numbered the iCalendar way: Sunday is 1, Saturday is 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[expect(missing_docs)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// The weekday number, 1 (Sunday) to 7 (Saturday).
    #[must_use]
    pub const fn number(self) -> i32 {
        self as i32
    }

    /// The weekday with the given number, 1 (Sunday) to 7 (Saturday).
    #[must_use]
    pub const fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weekday::Sunday => write!(f, "{KW_DAY_SU}"),
            Weekday::Monday => write!(f, "{KW_DAY_MO}"),
            Weekday::Tuesday => write!(f, "{KW_DAY_TU}"),
            Weekday::Wednesday => write!(f, "{KW_DAY_WE}"),
            Weekday::Thursday => write!(f, "{KW_DAY_TH}"),
            Weekday::Friday => write!(f, "{KW_DAY_FR}"),
            Weekday::Saturday => write!(f, "{KW_DAY_SA}"),
        }
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    /// Accepts the RFC 5545 two-letter codes and English names, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            KW_DAY_SU | "SUNDAY" => Ok(Weekday::Sunday),
            KW_DAY_MO | "MONDAY" => Ok(Weekday::Monday),
            KW_DAY_TU | "TUESDAY" => Ok(Weekday::Tuesday),
            KW_DAY_WE | "WEDNESDAY" => Ok(Weekday::Wednesday),
            KW_DAY_TH | "THURSDAY" => Ok(Weekday::Thursday),
            KW_DAY_FR | "FRIDAY" => Ok(Weekday::Friday),
            KW_DAY_SA | "SATURDAY" => Ok(Weekday::Saturday),
            _ => Err(ParseError::Weekday(s.to_string())),
        }
    }
}

/// Whether `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` of `year`.
///
/// Returns 0 when `month` is outside 1-12.
#[must_use]
pub const fn days_in_month(month: i32, year: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in `year`, 365 or 366.
#[must_use]
pub const fn days_in_year(year: i32) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// The 1-based ordinal of the date within its year.
#[must_use]
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    (1..month).map(|m| days_in_month(m, year)).sum::<i32>() + day
}

/// The day of the week of the date.
#[must_use]
pub fn day_of_week(year: i32, month: i32, day: i32) -> Weekday {
    let days = days_from_civil(i64::from(year), i64::from(month), i64::from(day));
    weekday_from_days(days)
}

/// The day of the year on which the week containing the date begins, with
/// weeks starting on `first`.
///
/// When the week started in the previous year the result is 0 or negative:
/// 0 is December 31st of the previous year, -1 is December 30th, and so on.
#[must_use]
pub fn start_day_of_week(year: i32, month: i32, day: i32, first: Weekday) -> i32 {
    let weekday = day_of_week(year, month, day).number();
    let delta = (weekday - first.number()).rem_euclid(7);
    day_of_year(year, month, day) - delta
}

/// The ISO 8601 week number of the date, 1 to 53.
///
/// Weeks start on Monday and week 1 is the week holding the year's first
/// Thursday, so the first days of January may fall in week 52 or 53 of the
/// previous year and the last days of December in week 1 of the next.
#[must_use]
pub fn week_number(year: i32, month: i32, day: i32) -> i32 {
    let thursday = start_day_of_week(year, month, day, Weekday::Monday) + 3;
    if thursday < 1 {
        (thursday + days_in_year(year - 1) - 1) / 7 + 1
    } else if thursday > days_in_year(year) {
        1
    } else {
        (thursday - 1) / 7 + 1
    }
}

/// Days since 1970-01-01 of a date with `month` in 1-12.
///
/// `day` may lie outside the month; the result moves linearly with it.
pub(crate) const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month + 9) % 12; // March is 0
    let doy = (153 * mp + 2) / 5 + day - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_DAYS
}

/// Inverse of [`days_from_civil`].
pub(crate) fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

pub(crate) fn weekday_from_days(days: i64) -> Weekday {
    // 1970-01-01 was a Thursday
    match (days + 4).rem_euclid(7) {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        _ => Weekday::Saturday,
    }
}
