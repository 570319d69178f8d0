// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors from parsing textual date, date-time and weekday values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not an RFC 5545 basic-format DATE or DATE-TIME.
    #[error("invalid date or date-time `{input}` at offset {offset}: {reason}")]
    DateTime {
        /// The rejected input.
        input: String,

        /// Byte offset of the first offending character.
        offset: usize,

        /// What the parser expected to find there.
        reason: String,
    },

    /// The text is not a weekday name or code.
    #[error("invalid weekday `{0}`, expected one of SU, MO, TU, WE, TH, FR, SA")]
    Weekday(String),
}

/// Errors from resolving a timezone in the `jiff` database.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZoneError {
    /// No zone with this identifier is known.
    #[error("unknown time zone `{tzid}`")]
    Unknown {
        /// The requested identifier.
        tzid: String,

        /// The lookup failure.
        #[source]
        source: jiff::Error,
    },

    /// A fixed offset that cannot be represented.
    #[error("invalid UTC offset of {seconds} seconds for `{tzid}`")]
    InvalidOffset {
        /// The identifier the zone was to be given.
        tzid: String,

        /// The rejected offset.
        seconds: i32,

        /// The range failure.
        #[source]
        source: jiff::Error,
    },
}
