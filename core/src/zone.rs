// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The timezone capability consumed by [`TimeValue`](crate::TimeValue).
//!
//! Timezone rules live outside this crate. A value only borrows a [`Zone`]
//! handle and asks it two questions: what its identifier is, and what its
//! UTC offset is at a given instant. Handles must outlive every value that
//! borrows them and must tolerate concurrent lookups.

use std::fmt;

use jiff::Timestamp;
use jiff::tz::{Offset, TimeZone};

use crate::error::ZoneError;
use crate::keyword::KW_TZID_UTC;

/// A timezone handle.
pub trait Zone: fmt::Debug + Send + Sync {
    /// Whether this handle denotes UTC.
    fn is_utc(&self) -> bool {
        false
    }

    /// The zone identifier, if it has one.
    fn tzid(&self) -> Option<&str>;

    /// The offset in effect at a local wall-clock time, given as the
    /// wall-clock fields counted as if they were UTC epoch seconds.
    fn utc_offset(&self, local_seconds: i64) -> ZoneOffset;

    /// The offset in effect at a UTC instant.
    fn utc_offset_of_utc(&self, utc_seconds: i64) -> ZoneOffset;
}

/// A UTC offset as reported by a [`Zone`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZoneOffset {
    /// Seconds east of UTC.
    pub seconds: i32,

    /// Whether daylight saving time is in effect.
    pub is_daylight: bool,
}

impl ZoneOffset {
    /// The zero offset.
    pub const UTC: Self = Self {
        seconds: 0,
        is_daylight: false,
    };
}

/// The UTC zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utc;

/// A shared UTC handle with `'static` lifetime.
pub static UTC: Utc = Utc;

impl Zone for Utc {
    fn is_utc(&self) -> bool {
        true
    }

    fn tzid(&self) -> Option<&str> {
        Some(KW_TZID_UTC)
    }

    fn utc_offset(&self, _local_seconds: i64) -> ZoneOffset {
        ZoneOffset::UTC
    }

    fn utc_offset_of_utc(&self, _utc_seconds: i64) -> ZoneOffset {
        ZoneOffset::UTC
    }
}

/// Whether two optional zone handles denote the same zone.
///
/// Two absent zones (floating) are the same, and so are two UTC handles,
/// the same handle twice, or two handles with equal identifiers.
#[must_use]
pub fn same_zone(a: Option<&dyn Zone>, b: Option<&dyn Zone>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            (a.is_utc() && b.is_utc())
                || std::ptr::addr_eq(a, b)
                || matches!((a.tzid(), b.tzid()), (Some(x), Some(y)) if x == y)
        }
        _ => false,
    }
}

/// Database identifiers that name UTC itself.
const UTC_ALIASES: [&str; 8] = [
    KW_TZID_UTC,
    "Etc/UTC",
    "Etc/UCT",
    "UCT",
    "Etc/Universal",
    "Universal",
    "Etc/Zulu",
    "Zulu",
];

/// A zone backed by the `jiff` timezone database.
#[derive(Debug, Clone)]
pub struct TzZone {
    tzid: String,
    tz: TimeZone,
}

impl TzZone {
    /// Look up a zone by its IANA identifier, e.g. `America/New_York`.
    ///
    /// # Errors
    ///
    /// If the identifier is not in the database.
    pub fn get(tzid: &str) -> Result<Self, ZoneError> {
        let tz = TimeZone::get(tzid).map_err(|source| ZoneError::Unknown {
            tzid: tzid.to_string(),
            source,
        })?;
        Ok(Self {
            tzid: tzid.to_string(),
            tz,
        })
    }

    /// A zone with a constant offset and no daylight saving time.
    ///
    /// # Errors
    ///
    /// If the offset is outside what `jiff` can represent (±25:59:59).
    pub fn fixed(tzid: impl Into<String>, seconds: i32) -> Result<Self, ZoneError> {
        let tzid = tzid.into();
        match Offset::from_seconds(seconds) {
            Ok(offset) => Ok(Self {
                tzid,
                tz: TimeZone::fixed(offset),
            }),
            Err(source) => Err(ZoneError::InvalidOffset {
                tzid,
                seconds,
                source,
            }),
        }
    }

    /// The underlying `jiff` timezone.
    #[must_use]
    pub const fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    fn offset_at(&self, timestamp: Timestamp) -> ZoneOffset {
        let info = self.tz.to_offset_info(timestamp);
        ZoneOffset {
            seconds: info.offset().seconds(),
            is_daylight: info.dst().is_dst(),
        }
    }
}

impl Zone for TzZone {
    fn is_utc(&self) -> bool {
        UTC_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(&self.tzid))
    }

    fn tzid(&self) -> Option<&str> {
        Some(&self.tzid)
    }

    fn utc_offset(&self, local_seconds: i64) -> ZoneOffset {
        // Nonexistent local times resolve with the "compatible" strategy
        let resolved = Timestamp::from_second(local_seconds)
            .map(|naive| naive.to_zoned(TimeZone::UTC).datetime())
            .and_then(|dt| self.tz.to_zoned(dt));
        match resolved {
            Ok(zoned) => {
                // In a gap the applied offset is the one before the transition,
                // not the one in effect at the resolved instant
                let timestamp = zoned.timestamp();
                let seconds = i32::try_from(local_seconds - timestamp.as_second())
                    .unwrap_or_else(|_| zoned.offset().seconds());
                ZoneOffset {
                    seconds,
                    is_daylight: self.offset_at(timestamp).is_daylight,
                }
            }
            Err(error) => {
                tracing::warn!(
                    tzid = %self.tzid,
                    local_seconds,
                    %error,
                    "cannot resolve local time, assuming zero offset"
                );
                ZoneOffset::UTC
            }
        }
    }

    fn utc_offset_of_utc(&self, utc_seconds: i64) -> ZoneOffset {
        match Timestamp::from_second(utc_seconds) {
            Ok(timestamp) => self.offset_at(timestamp),
            Err(error) => {
                tracing::warn!(
                    tzid = %self.tzid,
                    utc_seconds,
                    %error,
                    "cannot resolve instant, assuming zero offset"
                );
                ZoneOffset::UTC
            }
        }
    }
}
