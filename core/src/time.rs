// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The DATE and DATE-TIME value defined in RFC 5545 Sections 3.3.4 and 3.3.5.

mod compare;
mod convert;
mod format;
mod normalize;
mod parse;

use jiff::Timestamp;

use crate::calendar::{self, Weekday};
use crate::zone::{Zone, same_zone};

/// A calendar date or date-time, optionally tied to a timezone.
///
/// The value is one of:
///
/// - a DATE (`is_date`), a whole calendar day whose time fields are zero;
/// - a floating DATE-TIME (`zone` is `None`), whose wall-clock fields hold
///   in whatever zone the value is later interpreted;
/// - a UTC DATE-TIME (`zone` reports [`Zone::is_utc`]);
/// - a DATE-TIME local to some other zone, which needs the zone's offset
///   rules to become an instant.
///
/// Fields are plain integers so that arithmetic may push them out of range;
/// [`normalize`](Self::normalize) carries them back. The zone is borrowed, so
/// a value never outlives the zone handle it refers to.
///
/// The all-zero value with no zone is the *null time*, meaning "unset". It is
/// not an instant, though its fields count as in range.
#[derive(Debug, Clone, Copy)]
pub struct TimeValue<'z> {
    /// Year, proleptic Gregorian.
    pub year: i32,

    /// Month, 1-12.
    pub month: i32,

    /// Day of the month, 1-31.
    pub day: i32,

    /// Hour, 0-23.
    pub hour: i32,

    /// Minute, 0-59.
    pub minute: i32,

    /// Second, 0-59.
    pub second: i32,

    /// Whether this is a DATE rather than a DATE-TIME.
    pub is_date: bool,

    /// Whether daylight saving time applies. Informational only.
    pub is_daylight: bool,

    /// The zone the wall-clock fields are local to, `None` for floating.
    pub zone: Option<&'z dyn Zone>,
}

impl<'z> TimeValue<'z> {
    /// The null time, a DATE-TIME with every field zero and no zone.
    #[must_use]
    pub const fn null_time() -> Self {
        Self {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            is_date: false,
            is_daylight: false,
            zone: None,
        }
    }

    /// The null date, a DATE with every field zero and no zone.
    #[must_use]
    pub const fn null_date() -> Self {
        Self {
            is_date: true,
            ..Self::null_time()
        }
    }

    /// A floating DATE. Fields are kept as given, even when out of range.
    #[must_use]
    pub const fn new_date(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            ..Self::null_date()
        }
    }

    /// A floating DATE-TIME. Fields are kept as given, even when out of range.
    #[must_use]
    pub const fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            ..Self::null_time()
        }
    }

    /// The current time, expressed in `zone`, or as floating UTC wall-clock
    /// fields when `zone` is `None`.
    #[must_use]
    pub fn current_time(zone: Option<&'z dyn Zone>) -> Self {
        Self::from_epoch_seconds(Timestamp::now().as_second(), false, zone)
    }

    /// The current UTC date, as a floating DATE.
    #[must_use]
    pub fn today() -> Self {
        Self::from_epoch_seconds(Timestamp::now().as_second(), true, None)
    }

    /// The DATE on the `doy`-th day of `year`, counting January 1st as 1.
    ///
    /// Days outside the year roll into the neighbouring years: 0 is the last
    /// day of the previous year.
    #[must_use]
    pub fn from_day_of_year(doy: i32, year: i32) -> Self {
        Self::new_date(year, 1, doy).normalize()
    }

    /// The zone handle, `None` for floating values.
    #[must_use]
    pub fn timezone(&self) -> Option<&'z dyn Zone> {
        self.zone
    }

    /// The zone identifier, `None` for floating values.
    #[must_use]
    pub fn tzid(&self) -> Option<&'z str> {
        self.zone.and_then(Zone::tzid)
    }

    /// Relabel the wall-clock fields as local to `zone`.
    ///
    /// No offset is applied; use [`convert_to_zone`](Self::convert_to_zone)
    /// to keep the instant instead.
    #[must_use]
    pub fn set_timezone(self, zone: Option<&'z dyn Zone>) -> Self {
        Self { zone, ..self }
    }

    /// Whether this is the null time or null date.
    #[must_use]
    pub fn is_null_time(&self) -> bool {
        self.zone.is_none()
            && self.year == 0
            && self.month == 0
            && self.day == 0
            && self.hour == 0
            && self.minute == 0
            && self.second == 0
    }

    /// Whether every field lies in its legal range.
    ///
    /// A value awaiting [`normalize`](Self::normalize) reports `false`. The
    /// null time reports `true`: it is unset, not invalid.
    #[must_use]
    pub fn is_valid_time(&self) -> bool {
        if self.is_null_time() {
            return true;
        }

        let date_ok = (1..=12).contains(&self.month)
            && (1..=calendar::days_in_month(self.month, self.year)).contains(&self.day);
        let time_ok = if self.is_date {
            self.hour == 0 && self.minute == 0 && self.second == 0
        } else {
            (0..24).contains(&self.hour)
                && (0..60).contains(&self.minute)
                && (0..60).contains(&self.second)
        };
        date_ok && time_ok
    }

    /// Whether this is a DATE.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        self.is_date
    }

    /// Whether this value is in UTC.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        self.zone.is_some_and(Zone::is_utc)
    }

    /// Whether this value has no zone.
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        self.zone.is_none()
    }

    /// Day of the year, January 1st is 1.
    #[must_use]
    pub fn day_of_year(&self) -> i32 {
        let t = self.normalize();
        calendar::day_of_year(t.year, t.month, t.day)
    }

    /// Day of the week.
    #[must_use]
    pub fn day_of_week(&self) -> Weekday {
        let t = self.normalize();
        calendar::day_of_week(t.year, t.month, t.day)
    }

    /// Day of the year on which the week holding this value begins, with
    /// weeks starting on `first`. May be 0 or negative, see
    /// [`calendar::start_day_of_week`].
    #[must_use]
    pub fn start_day_of_week(&self, first: Weekday) -> i32 {
        let t = self.normalize();
        calendar::start_day_of_week(t.year, t.month, t.day, first)
    }

    /// ISO 8601 week number, 1-53.
    #[must_use]
    pub fn week_number(&self) -> i32 {
        let t = self.normalize();
        calendar::week_number(t.year, t.month, t.day)
    }
}

impl Default for TimeValue<'_> {
    fn default() -> Self {
        Self::null_time()
    }
}

impl PartialEq for TimeValue<'_> {
    /// Field-wise equality, with zones compared by [`same_zone`].
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year
            && self.month == other.month
            && self.day == other.day
            && self.hour == other.hour
            && self.minute == other.minute
            && self.second == other.second
            && self.is_date == other.is_date
            && self.is_daylight == other.is_daylight
            && same_zone(self.zone, other.zone)
    }
}

impl Eq for TimeValue<'_> {}

impl From<jiff::civil::Date> for TimeValue<'_> {
    fn from(date: jiff::civil::Date) -> Self {
        Self::new_date(
            i32::from(date.year()),
            i32::from(date.month()),
            i32::from(date.day()),
        )
    }
}

impl From<jiff::civil::DateTime> for TimeValue<'_> {
    fn from(dt: jiff::civil::DateTime) -> Self {
        Self::new(
            i32::from(dt.year()),
            i32::from(dt.month()),
            i32::from(dt.day()),
            i32::from(dt.hour()),
            i32::from(dt.minute()),
            i32::from(dt.second()),
        )
    }
}
