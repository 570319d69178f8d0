// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Keywords defined in iCalendar RFC 5545.

// Section 3.3.5 - Date-Time
pub const KW_DATETIME_SEPARATOR: char = 'T';
pub const KW_UTC_DESIGNATOR: char = 'Z';

// Section 3.3.10 - Recurrence Rule, weekday
pub const KW_DAY_SU: &str = "SU";
pub const KW_DAY_MO: &str = "MO";
pub const KW_DAY_TU: &str = "TU";
pub const KW_DAY_WE: &str = "WE";
pub const KW_DAY_TH: &str = "TH";
pub const KW_DAY_FR: &str = "FR";
pub const KW_DAY_SA: &str = "SA";

// Section 3.2.19 - Time Zone Identifier
pub const KW_TZID_UTC: &str = "UTC";
