// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use chrono::{Datelike, NaiveDate};

/// A normalized calendar-ish date.
///
/// The month is always in `1..=12` and the day in `1..=31`. No further
/// calendar validation is performed, so `StoryDate::new(2023, 2, 30)` is a
/// perfectly good value that sorts between February 28th and March 1st.
///
/// Ordering is chronological (year, then month, then day).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoryDate {
    year: i32,
    month: u8,
    day: u8,
}

impl StoryDate {
    /// Creates a date, clamping `month` into `1..=12` and `day` into `1..=31`.
    #[must_use]
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: clamp_to_u8(month, 12),
            day: clamp_to_u8(day, 31),
        }
    }

    /// Returns the year as written (after two-digit folding, if any).
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month in `1..=12`.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day in `1..=31`.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns a proleptic Gregorian day count for distance computations.
    ///
    /// Days past the end of their month overflow into the following month
    /// here, so February 30th counts as a day or two into March. Years
    /// outside the range `chrono` can represent are clamped to its limits.
    #[must_use]
    pub fn day_number(self) -> i64 {
        let year = self
            .year
            .clamp(NaiveDate::MIN.year(), NaiveDate::MAX.year());
        NaiveDate::from_ymd_opt(year, u32::from(self.month), 1).map_or(0, |first| {
            i64::from(first.num_days_from_ce()) + i64::from(self.day) - 1
        })
    }

    /// Returns the absolute number of days between `self` and `other`.
    #[must_use]
    pub fn days_between(self, other: Self) -> i64 {
        (self.day_number() - other.day_number()).abs()
    }

    /// Returns the canonical `D/M/YYYY` text form.
    ///
    /// This is the form written back to the store when an event is dragged to
    /// a new date; it parses back to the same value.
    #[must_use]
    pub fn canonical(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StoryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

fn clamp_to_u8(value: u32, max: u8) -> u8 {
    u8::try_from(value.clamp(1, u32::from(max))).unwrap_or(max)
}

/// The outcome of parsing a free-text date.
///
/// The derived ordering places every [`ParsedDate::Day`] before
/// [`ParsedDate::Unparsable`], so sorting a list of parsed dates moves the
/// unparsable ones to the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParsedDate {
    /// The text matched one of the recognized patterns.
    Day(StoryDate),
    /// The text did not match any pattern (including empty text).
    Unparsable,
}

impl ParsedDate {
    /// Returns the parsed date, if any.
    #[must_use]
    pub const fn day(self) -> Option<StoryDate> {
        match self {
            Self::Day(date) => Some(date),
            Self::Unparsable => None,
        }
    }

    /// Returns `true` for the sort-last sentinel.
    #[must_use]
    pub const fn is_unparsable(self) -> bool {
        matches!(self, Self::Unparsable)
    }
}

impl From<StoryDate> for ParsedDate {
    fn from(date: StoryDate) -> Self {
        Self::Day(date)
    }
}
