// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::calendar::{civil_from_days, days_from_civil};
use crate::time::TimeValue;
use crate::time::normalize::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, saturating_i32,
};
use crate::zone::{UTC, Zone, ZoneOffset, same_zone};

impl<'z> TimeValue<'z> {
    /// The value at `seconds` since 1970-01-01T00:00:00Z, expressed as wall
    /// clock in `zone`.
    ///
    /// With no zone, or a UTC zone, the fields are the UTC wall clock. A DATE
    /// keeps the calendar day of that wall clock.
    #[must_use]
    pub fn from_epoch_seconds(seconds: i64, is_date: bool, zone: Option<&'z dyn Zone>) -> Self {
        let offset = match zone {
            Some(zone) if !zone.is_utc() => zone.utc_offset_of_utc(seconds),
            _ => ZoneOffset::UTC,
        };

        let local = seconds.saturating_add(i64::from(offset.seconds));
        let mut out = Self::from_wall_clock_seconds(local);
        out.is_daylight = offset.is_daylight;
        out.zone = zone;
        if is_date {
            out.is_date = true;
            out.hour = 0;
            out.minute = 0;
            out.second = 0;
        }
        out
    }

    /// Seconds since the epoch, counting the wall-clock fields as UTC.
    ///
    /// No zone offset is applied, so this is only an instant for floating or
    /// UTC values; see [`as_utc_epoch_seconds`](Self::as_utc_epoch_seconds).
    /// A DATE counts as its midnight. The null time is 0.
    #[must_use]
    pub fn as_epoch_seconds(&self) -> i64 {
        if self.is_null_time() {
            return 0;
        }
        self.wall_clock_seconds()
    }

    /// Seconds since the epoch of this value's wall clock in `zone`, i.e. the
    /// value is first converted into `zone` and its wall clock is then counted
    /// as UTC.
    ///
    /// With no zone the value's own fields are counted. The null time is 0.
    #[must_use]
    pub fn as_epoch_seconds_in_zone(&self, zone: Option<&dyn Zone>) -> i64 {
        if self.is_null_time() {
            return 0;
        }
        match zone {
            Some(zone) => self.convert_to_zone(Some(zone)).wall_clock_seconds(),
            None => self.wall_clock_seconds(),
        }
    }

    /// Seconds since the epoch of the instant this value denotes.
    ///
    /// Floating values are taken as UTC. A DATE denotes midnight at the start
    /// of the day in its zone. The null time is 0.
    #[must_use]
    pub fn as_utc_epoch_seconds(&self) -> i64 {
        if self.is_null_time() {
            return 0;
        }

        let mut t = self.normalize();
        t.is_date = false;
        t.convert_to_zone(Some(&UTC)).wall_clock_seconds()
    }

    /// Re-express this value in another zone, keeping the instant.
    ///
    /// DATE values and values already in `zone` come back unchanged. A
    /// floating value has no instant to keep: converting it, or converting
    /// to floating, only relabels the zone.
    #[must_use]
    pub fn convert_to_zone(self, zone: Option<&'z dyn Zone>) -> Self {
        if self.is_date || same_zone(self.zone, zone) {
            return self;
        }

        let (Some(from), Some(to)) = (self.zone, zone) else {
            return self.set_timezone(zone);
        };

        let wall = self.wall_clock_seconds();
        let from_offset = if from.is_utc() {
            0
        } else {
            i64::from(from.utc_offset(wall).seconds)
        };
        let utc = wall.saturating_sub(from_offset);

        let to_offset = if to.is_utc() {
            ZoneOffset::UTC
        } else {
            to.utc_offset_of_utc(utc)
        };

        tracing::trace!(from = ?from.tzid(), to = ?to.tzid(), utc, "convert between zones");
        let local = utc.saturating_add(i64::from(to_offset.seconds));
        let mut out = Self::from_wall_clock_seconds(local);
        out.is_daylight = to_offset.is_daylight;
        out.zone = zone;
        out
    }

    /// The normalized wall-clock fields counted as UTC seconds.
    pub(crate) fn wall_clock_seconds(&self) -> i64 {
        let t = self.normalize();
        let days = days_from_civil(i64::from(t.year), i64::from(t.month), i64::from(t.day));
        days * SECONDS_PER_DAY
            + i64::from(t.hour) * SECONDS_PER_HOUR
            + i64::from(t.minute) * SECONDS_PER_MINUTE
            + i64::from(t.second)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_wall_clock_seconds(seconds: i64) -> Self {
        let (year, month, day) = civil_from_days(seconds.div_euclid(SECONDS_PER_DAY));
        let rest = seconds.rem_euclid(SECONDS_PER_DAY);
        Self {
            year: saturating_i32(year),
            month: month as i32,
            day: day as i32,
            hour: (rest / SECONDS_PER_HOUR) as i32,
            minute: (rest % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as i32,
            second: (rest % SECONDS_PER_MINUTE) as i32,
            ..Self::null_time()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::zone::TzZone;

    use super::*;

    #[derive(Debug)]
    struct Fixed(&'static str, i32);

    impl Zone for Fixed {
        fn tzid(&self) -> Option<&str> {
            Some(self.0)
        }

        fn utc_offset(&self, _local_seconds: i64) -> ZoneOffset {
            ZoneOffset {
                seconds: self.1,
                is_daylight: false,
            }
        }

        fn utc_offset_of_utc(&self, _utc_seconds: i64) -> ZoneOffset {
            ZoneOffset {
                seconds: self.1,
                is_daylight: false,
            }
        }
    }

    const PLUS_TWO: Fixed = Fixed("Test/PlusTwo", 2 * 3600);
    const MINUS_FIVE: Fixed = Fixed("Test/MinusFive", -5 * 3600);

    #[test]
    fn builds_from_epoch_seconds() {
        #[rustfmt::skip]
        let cases = [
            (0,              TimeValue::new(1970, 1, 1, 0, 0, 0)),
            (86_399,         TimeValue::new(1970, 1, 1, 23, 59, 59)),
            (-1,             TimeValue::new(1969, 12, 31, 23, 59, 59)),
            (951_782_400,    TimeValue::new(2000, 2, 29, 0, 0, 0)),
            (1_612_134_000,  TimeValue::new(2021, 1, 31, 23, 0, 0)),
            (-2_208_988_800, TimeValue::new(1900, 1, 1, 0, 0, 0)),
        ];
        for (seconds, expected) in cases {
            assert_eq!(TimeValue::from_epoch_seconds(seconds, false, None), expected);
            assert_eq!(expected.as_epoch_seconds(), seconds);
        }
    }

    #[test]
    fn builds_dates_from_epoch_seconds() {
        let date = TimeValue::from_epoch_seconds(1_612_134_000, true, None);
        assert_eq!(date, TimeValue::new_date(2021, 1, 31));
        assert_eq!(date.as_epoch_seconds(), 1_612_051_200);
    }

    #[test]
    fn builds_zoned_values_from_epoch_seconds() {
        // 2021-01-31T23:00:00Z
        let t = TimeValue::from_epoch_seconds(1_612_134_000, false, Some(&PLUS_TWO));
        assert_eq!((t.year, t.month, t.day, t.hour), (2021, 2, 1, 1));
        assert_eq!(t.tzid(), Some("Test/PlusTwo"));

        let t = TimeValue::from_epoch_seconds(1_612_134_000, false, Some(&UTC));
        assert_eq!((t.year, t.month, t.day, t.hour), (2021, 1, 31, 23));
        assert!(t.is_utc());

        let d = TimeValue::from_epoch_seconds(1_612_134_000, true, Some(&PLUS_TWO));
        assert!(d.is_date());
        assert_eq!((d.year, d.month, d.day, d.hour), (2021, 2, 1, 0));
    }

    #[test]
    fn reports_daylight_from_zone() {
        let new_york = TzZone::get("America/New_York").unwrap();
        let summer = TimeValue::from_epoch_seconds(1_626_350_400, false, Some(&new_york));
        assert_eq!((summer.hour, summer.is_daylight), (8, true));

        let winter = TimeValue::from_epoch_seconds(1_610_712_000, false, Some(&new_york));
        assert_eq!((winter.hour, winter.is_daylight), (7, false));
    }

    #[test]
    fn null_time_counts_as_zero() {
        let null = TimeValue::null_time();
        assert_eq!(null.as_epoch_seconds(), 0);
        assert_eq!(null.as_epoch_seconds_in_zone(Some(&PLUS_TWO)), 0);
        assert_eq!(null.as_utc_epoch_seconds(), 0);
    }

    #[test]
    fn counts_wall_clock_in_zone() {
        let t = TimeValue::new(2021, 1, 31, 23, 0, 0).set_timezone(Some(&UTC));
        assert_eq!(t.as_epoch_seconds(), 1_612_134_000);
        assert_eq!(t.as_epoch_seconds_in_zone(None), 1_612_134_000);
        assert_eq!(t.as_epoch_seconds_in_zone(Some(&UTC)), 1_612_134_000);
        assert_eq!(
            t.as_epoch_seconds_in_zone(Some(&PLUS_TWO)),
            1_612_134_000 + 2 * 3600
        );
    }

    #[test]
    fn counts_zoned_instant_as_utc() {
        let t = TimeValue::new(2021, 2, 1, 1, 0, 0).set_timezone(Some(&PLUS_TWO));
        assert_eq!(t.as_epoch_seconds(), 1_612_141_200);
        assert_eq!(t.as_utc_epoch_seconds(), 1_612_134_000);

        let floating = TimeValue::new(2021, 1, 31, 23, 0, 0);
        assert_eq!(floating.as_utc_epoch_seconds(), 1_612_134_000);

        let date = TimeValue::new_date(2021, 2, 1).set_timezone(Some(&MINUS_FIVE));
        assert_eq!(date.as_utc_epoch_seconds(), 1_612_137_600 + 5 * 3600);
    }

    #[test]
    fn converts_between_zones() {
        let t = TimeValue::new(2021, 1, 31, 23, 0, 0).set_timezone(Some(&UTC));

        let plus_two = t.convert_to_zone(Some(&PLUS_TWO));
        assert_eq!(
            plus_two,
            TimeValue::new(2021, 2, 1, 1, 0, 0).set_timezone(Some(&PLUS_TWO))
        );

        let minus_five = plus_two.convert_to_zone(Some(&MINUS_FIVE));
        assert_eq!(
            minus_five,
            TimeValue::new(2021, 1, 31, 18, 0, 0).set_timezone(Some(&MINUS_FIVE))
        );

        let back = minus_five.convert_to_zone(Some(&UTC));
        assert_eq!(back, t);
    }

    #[test]
    fn conversion_keeps_the_instant() {
        let berlin = TzZone::get("Europe/Berlin").unwrap();
        let sydney = TzZone::get("Australia/Sydney").unwrap();
        for seconds in [0, 1_612_134_000, 1_626_350_400, 1_711_846_800, -86_400 * 365] {
            let utc = TimeValue::from_epoch_seconds(seconds, false, Some(&UTC));
            let in_berlin = utc.convert_to_zone(Some(&berlin));
            let in_sydney = in_berlin.convert_to_zone(Some(&sydney));
            assert_eq!(in_berlin.as_utc_epoch_seconds(), seconds);
            assert_eq!(in_sydney.as_utc_epoch_seconds(), seconds);
            assert_eq!(in_sydney.convert_to_zone(Some(&UTC)), utc);
        }
    }

    #[test]
    fn relabels_floating_values() {
        let floating = TimeValue::new(2021, 1, 31, 23, 0, 0);

        let zoned = floating.convert_to_zone(Some(&PLUS_TWO));
        assert_eq!((zoned.day, zoned.hour), (31, 23));
        assert_eq!(zoned.tzid(), Some("Test/PlusTwo"));

        let back = zoned.convert_to_zone(None);
        assert_eq!(back, floating);
    }

    #[test]
    fn leaves_dates_and_same_zone_alone() {
        let date = TimeValue::new_date(2021, 1, 31).set_timezone(Some(&UTC));
        assert_eq!(date.convert_to_zone(Some(&PLUS_TWO)), date);

        let twin = Fixed("Test/PlusTwo", 2 * 3600);
        let t = TimeValue::new(2021, 1, 31, 23, 75, 0).set_timezone(Some(&PLUS_TWO));
        let same = t.convert_to_zone(Some(&twin));
        assert_eq!(same, t);
    }
}
