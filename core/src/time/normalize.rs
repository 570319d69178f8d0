// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::{civil_from_days, days_from_civil};
use crate::time::TimeValue;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

impl TimeValue<'_> {
    /// Carry out-of-range fields into their neighbours until every field is
    /// in range, e.g. minute 75 becomes one hour and 15 minutes, and February
    /// 30th becomes March 1st or 2nd.
    ///
    /// DATE values come back with their time fields zeroed. The zone and the
    /// daylight flag are untouched. The null time normalizes to a real date,
    /// so check [`is_null_time`](Self::is_null_time) first where that matters.
    #[must_use]
    pub fn normalize(self) -> Self {
        self.carry(0, 0)
    }

    /// Add a signed duration and normalize.
    ///
    /// DATE values only move by whole days; the time parts of the duration
    /// are dropped for them.
    ///
    /// ```
    /// # use caltime_core::TimeValue;
    /// let t = TimeValue::new(2021, 2, 28, 23, 0, 0).adjust(0, 1, 0, 0);
    /// assert_eq!(t, TimeValue::new(2021, 3, 1, 0, 0, 0));
    /// ```
    #[must_use]
    pub fn adjust(self, days: i32, hours: i32, minutes: i32, seconds: i32) -> Self {
        if self.is_date {
            return self.carry(i64::from(days), 0);
        }

        let seconds = i64::from(hours) * SECONDS_PER_HOUR
            + i64::from(minutes) * SECONDS_PER_MINUTE
            + i64::from(seconds);
        self.carry(i64::from(days), seconds)
    }

    /// Normalize after shifting by extra days and seconds. Works on `i64`
    /// throughout, so only the final year can overflow, and it saturates.
    #[expect(clippy::cast_possible_truncation)]
    fn carry(self, extra_days: i64, extra_seconds: i64) -> Self {
        let mut out = self;
        let mut days = extra_days;

        if self.is_date {
            out.hour = 0;
            out.minute = 0;
            out.second = 0;
        } else {
            let total = i64::from(self.hour) * SECONDS_PER_HOUR
                + i64::from(self.minute) * SECONDS_PER_MINUTE
                + i64::from(self.second)
                + extra_seconds;
            days += total.div_euclid(SECONDS_PER_DAY);

            let rest = total.rem_euclid(SECONDS_PER_DAY); // [0, 86399]
            out.hour = (rest / SECONDS_PER_HOUR) as i32;
            out.minute = (rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as i32;
            out.second = (rest % SECONDS_PER_MINUTE) as i32;
        }

        // Months first, then days counted from the first of that month
        let months = i64::from(self.month) - 1;
        let year = i64::from(self.year) + months.div_euclid(12);
        let month = months.rem_euclid(12) + 1;
        let serial = days_from_civil(year, month, 1) + i64::from(self.day) - 1 + days;

        let (year, month, day) = civil_from_days(serial);
        out.year = saturating_i32(year);
        out.month = month as i32; // [1, 12]
        out.day = day as i32; // [1, 31]
        out
    }
}

pub(crate) fn saturating_i32(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
