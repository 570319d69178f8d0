// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::time::TimeValue;

/// A half-open interval `[start, end)` of UTC epoch seconds, as used for
/// free/busy periods.
///
/// `start <= end` is expected but not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeSpan {
    /// Inclusive start, in seconds since the epoch.
    pub start: i64,

    /// Exclusive end, in seconds since the epoch.
    pub end: i64,

    /// Whether the period is busy rather than free.
    pub is_busy: bool,
}

impl TimeSpan {
    /// The span between the instants two values denote, see
    /// [`TimeValue::as_utc_epoch_seconds`].
    #[must_use]
    pub fn new(start: &TimeValue<'_>, end: &TimeValue<'_>, is_busy: bool) -> Self {
        Self {
            start: start.as_utc_epoch_seconds(),
            end: end.as_utc_epoch_seconds(),
            is_busy,
        }
    }

    /// Whether the two spans share any instant. Spans that only touch do
    /// not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `inner` lies entirely within this span.
    #[must_use]
    pub const fn contains(&self, inner: &Self) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }

    /// Whether this span lies entirely within `container`.
    #[must_use]
    pub const fn is_within(&self, container: &Self) -> bool {
        container.contains(self)
    }

    /// Length in seconds.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end - self.start
    }
}
