// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::keyword::{KW_DATETIME_SEPARATOR, KW_UTC_DESIGNATOR};
use crate::time::TimeValue;

impl TimeValue<'_> {
    /// Write the RFC 5545 basic format: `YYYYMMDD` for a DATE,
    /// `YYYYMMDDTHHMMSS` for a DATE-TIME, with `Z` appended in UTC.
    ///
    /// Fields are written as they are; normalize first if they may be out of
    /// range.
    ///
    /// # Errors
    ///
    /// If the writer fails.
    pub fn write_ical<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        write!(w, "{:04}{:02}{:02}", self.year, self.month, self.day)?;
        if !self.is_date {
            write!(
                w,
                "{KW_DATETIME_SEPARATOR}{:02}{:02}{:02}",
                self.hour, self.minute, self.second
            )?;
            if self.is_utc() {
                write!(w, "{KW_UTC_DESIGNATOR}")?;
            }
        }
        Ok(())
    }

    /// The RFC 5545 basic format as a new string, see
    /// [`write_ical`](Self::write_ical).
    #[must_use]
    pub fn as_ical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_ical(f)
    }
}
