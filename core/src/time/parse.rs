// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use chumsky::Parser;
use chumsky::extra::ParserExtra;
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::keyword::{KW_DATETIME_SEPARATOR, KW_UTC_DESIGNATOR};
use crate::time::TimeValue;
use crate::zone::UTC;

impl TimeValue<'_> {
    /// Parse an RFC 5545 basic-format DATE (`YYYYMMDD`) or DATE-TIME
    /// (`YYYYMMDDTHHMMSS`, with a trailing `Z` for UTC).
    ///
    /// Fields are read as digits only; their ranges are not checked, so use
    /// [`is_valid_time`](Self::is_valid_time) or
    /// [`normalize`](Self::normalize) as needed. DATE-TIMEs without `Z`
    /// are floating.
    ///
    /// # Errors
    ///
    /// If the text does not match either layout exactly.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        value_date_or_date_time::<'_, _, extra::Err<Rich<'_, char>>>()
            .parse(text)
            .into_result()
            .map_err(|errs| {
                let (offset, reason) = errs.into_iter().next().map_or_else(
                    || (0, String::from("unexpected input")),
                    |e| (e.span().start, e.reason().to_string()),
                );
                ParseError::DateTime {
                    input: text.to_string(),
                    offset,
                    reason,
                }
            })
    }

    /// Parse like [`parse`](Self::parse), yielding the null time on malformed
    /// input.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        Self::parse(text).unwrap_or_else(|error| {
            tracing::debug!(%error, "malformed date-time, using the null time");
            Self::null_time()
        })
    }
}

impl FromStr for TimeValue<'_> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Format Definition:
///
/// ```txt
/// date-value   = 4DIGIT 2DIGIT 2DIGIT
/// date-time    = date-value "T" time-value ["Z"]
/// time-value   = 2DIGIT 2DIGIT 2DIGIT
/// ```
fn value_date_or_date_time<'src, I, E>() -> impl Parser<'src, I, TimeValue<'static>, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    let date = number(4).then(number(2)).then(number(2));

    let time = just(KW_DATETIME_SEPARATOR)
        .ignore_then(number(2).then(number(2)).then(number(2)))
        .then(just(KW_UTC_DESIGNATOR).or_not());

    date.then(time.or_not())
        .map(|(((year, month), day), time)| match time {
            None => TimeValue::new_date(year, month, day),
            Some((((hour, minute), second), utc)) => {
                let t = TimeValue::new(year, month, day, hour, minute, second);
                match utc {
                    Some(_) => t.set_timezone(Some(&UTC)),
                    None => t,
                }
            }
        })
}

/// A fixed-width run of decimal digits.
fn number<'src, I, E>(width: usize) -> impl Parser<'src, I, i32, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    digit()
        .repeated()
        .exactly(width)
        .collect::<Vec<_>>()
        .map(|digits| digits.into_iter().fold(0, |acc, d| 10 * acc + d))
}

const fn digit<'src, I, E>() -> impl Parser<'src, I, i32, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
{
    select! {
        '0' => 0,
        '1' => 1,
        '2' => 2,
        '3' => 3,
        '4' => 4,
        '5' => 5,
        '6' => 6,
        '7' => 7,
        '8' => 8,
        '9' => 9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dates_and_date_times() {
        #[rustfmt::skip]
        let success_cases = [
            // examples from RFC 5545 Section 3.3.4 and 3.3.5
            ("19970714",         TimeValue::new_date(1997, 7, 14)),
            ("19980118T230000",  TimeValue::new(1998, 1, 18, 23, 0, 0)),
            ("19980119T070000Z", TimeValue::new(1998, 1, 19, 7, 0, 0).set_timezone(Some(&UTC))),
            // extra tests
            ("20000229",         TimeValue::new_date(2000, 2, 29)),
            ("20210131T230000Z", TimeValue::new(2021, 1, 31, 23, 0, 0).set_timezone(Some(&UTC))),
            ("00010101T000000",  TimeValue::new(1, 1, 1, 0, 0, 0)),
            ("99991231T235959",  TimeValue::new(9999, 12, 31, 23, 59, 59)),
            // ranges are not checked
            ("20211301",         TimeValue::new_date(2021, 13, 1)),
            ("20210131T256199",  TimeValue::new(2021, 1, 31, 25, 61, 99)),
        ];
        for (src, expected) in success_cases {
            assert_eq!(TimeValue::parse(src).unwrap(), expected, "{src}");
        }
    }

    #[test]
    fn rejects_malformed_text() {
        let fail_cases = [
            "",
            "2021013",           // short date
            "202101311",         // long date
            "2021-01-31",        // extended format
            "20210131T",         // missing time
            "20210131T2300",     // short time
            "20210131T2300000",  // long time
            "20210131t230000",   // lowercase separator
            "20210131T230000z",  // lowercase designator
            "20210131T230000ZZ", // trailing input
            "20210131 230000",   // space separator
            "2021O131",          // letter O
            " 20210131",         // leading space
        ];
        for src in fail_cases {
            assert!(TimeValue::parse(src).is_err(), "{src} should fail");
        }
    }

    #[test]
    fn reports_error_offset() {
        let err = TimeValue::parse("2021O131").unwrap_err();
        let ParseError::DateTime { input, offset, .. } = err else {
            panic!("unexpected error kind");
        };
        assert_eq!(input, "2021O131");
        assert_eq!(offset, 4);

        let err = TimeValue::parse("20210131T23000Z").unwrap_err();
        assert!(err.to_string().contains("20210131T23000Z"));
    }

    #[test]
    fn from_string_falls_back_to_null() {
        assert!(TimeValue::from_string("not a date").is_null_time());
        assert!(TimeValue::from_string("").is_null_time());
        assert_eq!(
            TimeValue::from_string("20210131"),
            TimeValue::new_date(2021, 1, 31)
        );
    }

    #[test]
    fn implements_from_str() {
        let t: TimeValue<'_> = "20210131T230000Z".parse().unwrap();
        assert!(t.is_utc());
        assert!("garbage".parse::<TimeValue<'_>>().is_err());
    }
}
