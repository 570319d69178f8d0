// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use crate::time::TimeValue;
use crate::zone::{UTC, Zone};

impl TimeValue<'_> {
    /// Order two values by the time they denote.
    ///
    /// Both values are converted to UTC first, so zoned values compare as
    /// instants even around daylight saving transitions. Floating values
    /// compare by their normalized wall clock. Two DATEs on the same day are
    /// equal, and a DATE sorts before any DATE-TIME on its day.
    #[must_use]
    pub fn compare(&self, other: &TimeValue<'_>) -> Ordering {
        let (a, b) = aligned(*self, *other);
        date_key(&a)
            .cmp(&date_key(&b))
            .then_with(|| match (a.is_date, b.is_date) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => time_key(&a).cmp(&time_key(&b)),
            })
    }

    /// Order two values by calendar day only, aligning zones as
    /// [`compare`](Self::compare) does.
    #[must_use]
    pub fn compare_date_only(&self, other: &TimeValue<'_>) -> Ordering {
        let (a, b) = aligned(*self, *other);
        date_key(&a).cmp(&date_key(&b))
    }

    /// Order two values by the calendar day each falls on in `zone`.
    ///
    /// Floating values are taken to be in `zone` already.
    #[must_use]
    pub fn compare_date_only_tz(&self, other: &TimeValue<'_>, zone: Option<&dyn Zone>) -> Ordering {
        let a = self.convert_to_zone(zone).normalize();
        let b = other.convert_to_zone(zone).normalize();
        date_key(&a).cmp(&date_key(&b))
    }
}

/// Bring two values onto a common footing: both converted to UTC and
/// normalized.
///
/// Floating values are only relabeled and DATE values are left as they are,
/// so those still compare by their fields.
fn aligned<'a>(a: TimeValue<'a>, b: TimeValue<'a>) -> (TimeValue<'a>, TimeValue<'a>) {
    (
        a.convert_to_zone(Some(&UTC)).normalize(),
        b.convert_to_zone(Some(&UTC)).normalize(),
    )
}

const fn date_key(t: &TimeValue<'_>) -> (i32, i32, i32) {
    (t.year, t.month, t.day)
}

const fn time_key(t: &TimeValue<'_>) -> (i32, i32, i32) {
    (t.hour, t.minute, t.second)
}
