// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone-aware iCalendar DATE and DATE-TIME values.
//!
//! [`TimeValue`] models the RFC 5545 DATE and DATE-TIME value: a plain
//! date, a floating date-time, a UTC date-time, or a date-time tied to a
//! named timezone. It normalizes out-of-range fields, compares values across
//! zones, converts between zones and to UNIX epoch seconds, and round-trips
//! through the basic iCalendar string format.
//!
//! Timezone rules are not part of this crate. A value borrows a [`Zone`]
//! handle and queries it for UTC offsets; [`TzZone`] adapts the `jiff`
//! timezone database to that interface.
//!
//! ```
//! use caltime_core::{TimeValue, UTC};
//!
//! let t = TimeValue::from_string("20210131T230000Z");
//! assert!(t.is_utc());
//!
//! let next = t.adjust(0, 2, 0, 0);
//! assert_eq!(next.as_ical_string(), "20210201T010000Z");
//!
//! let floating = TimeValue::from_string("20210201T010000");
//! assert_eq!(floating.convert_to_zone(Some(&UTC)), next);
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::similar_names, clippy::module_name_repetitions)]

pub mod calendar;
mod error;
mod keyword;
mod span;
mod time;
mod zone;

pub use crate::calendar::Weekday;
pub use crate::error::{ParseError, ZoneError};
pub use crate::span::TimeSpan;
pub use crate::time::TimeValue;
pub use crate::zone::{TzZone, UTC, Utc, Zone, ZoneOffset, same_zone};
