// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::date::{ParsedDate, StoryDate};
use crate::month::month_from_name;

static YEAR_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})[/\-.\s]([0-9]{1,2})[/\-.\s]([0-9]{1,2})$")
        .expect("valid year-first regex")
});
static DAY_FIRST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})[/\-.\s]([0-9]{1,2})(?:[/\-.\s]([0-9]{2,4}))?$")
        .expect("valid day-first regex")
});
static DAY_MONTH_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\s+([a-zåäö.]+)\s*([0-9]{2,4})?$")
        .expect("valid day-month-name regex")
});
static MONTH_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zåäö.]+)\s*([0-9]{2,4})?$").expect("valid month-name regex"));

/// Free-text date parser.
///
/// The parser holds only the year used when the text omits one, which keeps
/// [`DateParser::parse`] deterministic for a given parser.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateParser {
    current_year: i32,
}

impl DateParser {
    /// Creates a parser that fills in `current_year` when the text has no year.
    #[must_use]
    pub const fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    /// Creates a parser using the year of the local clock.
    #[must_use]
    pub fn from_local_clock() -> Self {
        Self::new(Local::now().year())
    }

    /// Returns the year used for text without an explicit year.
    #[must_use]
    pub const fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Parses `text` into a [`ParsedDate`].
    ///
    /// Never fails: text that matches no pattern yields
    /// [`ParsedDate::Unparsable`].
    #[must_use]
    pub fn parse(&self, text: &str) -> ParsedDate {
        let text = text.trim().to_lowercase();
        if text.is_empty() {
            return ParsedDate::Unparsable;
        }
        self.try_parse(&text)
            .map_or(ParsedDate::Unparsable, ParsedDate::Day)
    }

    fn try_parse(&self, text: &str) -> Option<StoryDate> {
        if let Some(caps) = YEAR_FIRST_RE.captures(text) {
            let year = number(&caps, 1)?;
            return Some(StoryDate::new(
                i32::try_from(year).ok()?,
                number(&caps, 2)?,
                number(&caps, 3)?,
            ));
        }

        if let Some(caps) = DAY_FIRST_RE.captures(text) {
            let day = number(&caps, 1)?;
            let month = number(&caps, 2)?;
            let year = self.year_or_current(&caps, 3)?;
            return Some(StoryDate::new(year, month, day));
        }

        // A day followed by an unknown word falls through; the month-only
        // pattern below cannot match text starting with a digit, so such
        // input ends up unparsable.
        if let Some(caps) = DAY_MONTH_NAME_RE.captures(text)
            && let Some(month) = month_from_name(&caps[2])
        {
            let day = number(&caps, 1)?;
            let year = self.year_or_current(&caps, 3)?;
            return Some(StoryDate::new(year, u32::from(month), day));
        }

        if let Some(caps) = MONTH_NAME_RE.captures(text)
            && let Some(month) = month_from_name(&caps[1])
        {
            let year = self.year_or_current(&caps, 2)?;
            return Some(StoryDate::new(year, u32::from(month), 1));
        }

        None
    }

    fn year_or_current(&self, caps: &Captures<'_>, group: usize) -> Option<i32> {
        match caps.get(group) {
            None => Some(self.current_year),
            Some(m) => m.as_str().parse::<i32>().ok().map(fold_short_year),
        }
    }
}

/// Convenience wrapper around [`DateParser::parse`] using the local clock's year.
///
/// ```rust
/// use storyline_date::{ParsedDate, StoryDate, parse_date};
///
/// assert_eq!(parse_date("1999-12-31"), ParsedDate::Day(StoryDate::new(1999, 12, 31)));
/// ```
#[must_use]
pub fn parse_date(text: &str) -> ParsedDate {
    DateParser::from_local_clock().parse(text)
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// `24` means 2024 and `87` means 1987; anything from 100 up is literal.
fn fold_short_year(year: i32) -> i32 {
    if year < 50 {
        2000 + year
    } else if year < 100 {
        1900 + year
    } else {
        year
    }
}
