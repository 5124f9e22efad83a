// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `storyline_date` crate.
//!
//! These pin the pattern order, year folding, clamping, and the sentinel
//! behavior that the timeline relies on to exclude unparsable events.

use storyline_date::{DateParser, ParsedDate, StoryDate};

const YEAR: i32 = 2031;

fn parse(text: &str) -> ParsedDate {
    DateParser::new(YEAR).parse(text)
}

fn day(year: i32, month: u32, day: u32) -> ParsedDate {
    ParsedDate::Day(StoryDate::new(year, month, day))
}

#[test]
fn year_first_with_every_separator() {
    for text in ["2024/03/05", "2024-03-05", "2024.03.05", "2024 03 05", "2024/3/5"] {
        assert_eq!(parse(text), day(2024, 3, 5), "input {text:?}");
    }
}

#[test]
fn year_first_clamps_month_and_day() {
    assert_eq!(parse("2024/13/40"), day(2024, 12, 31));
    assert_eq!(parse("2024/00/00"), day(2024, 1, 1));
}

#[test]
fn day_first_with_short_year() {
    assert_eq!(parse("5/3/24"), day(2024, 3, 5));
    assert_eq!(parse("5-3-87"), day(1987, 3, 5));
    assert_eq!(parse("05.03.2024"), day(2024, 3, 5));
}

#[test]
fn day_first_without_year_uses_current_year() {
    assert_eq!(parse("5/3"), day(YEAR, 3, 5));
    assert_eq!(parse("31 12"), day(YEAR, 12, 31));
}

#[test]
fn day_first_keeps_impossible_days_by_clamping() {
    // February 31st is kept numerically rather than rejected.
    assert_eq!(parse("31/2/2024"), day(2024, 2, 31));
    assert_eq!(parse("99/99/2024"), day(2024, 12, 31));
}

#[test]
fn day_with_month_name() {
    assert_eq!(parse("5 mar 2024"), day(2024, 3, 5));
    assert_eq!(parse("5 March 2024"), day(2024, 3, 5));
    assert_eq!(parse("5 mars"), day(YEAR, 3, 5));
    assert_eq!(parse("17 okt. 98"), day(1998, 10, 17));
    assert_eq!(parse("1 maj2020"), day(2020, 5, 1));
}

#[test]
fn month_name_alone_defaults_day_to_first() {
    assert_eq!(parse("march"), day(YEAR, 3, 1));
    assert_eq!(parse("  SEPT.  "), day(YEAR, 9, 1));
    assert_eq!(parse("december 1941"), day(1941, 12, 1));
    assert_eq!(parse("jan 05"), day(2005, 1, 1));
}

#[test]
fn swedish_letters_are_accepted_in_month_tokens() {
    // Not a month, but the token shape is valid: falls through to unparsable.
    assert_eq!(parse("försommar"), ParsedDate::Unparsable);
    assert_eq!(parse("5 för"), ParsedDate::Unparsable);
}

#[test]
fn empty_and_garbage_text_is_unparsable() {
    for text in ["", "   ", "someday", "the day after", "2024/03", "12 2024", "5 smarch 2024"] {
        assert_eq!(parse(text), ParsedDate::Unparsable, "input {text:?}");
    }
}

#[test]
fn unparsable_sorts_last_among_parsed_dates() {
    let mut parsed: Vec<_> = ["garbage", "5/3/24", "", "1 jan 1900"]
        .into_iter()
        .map(parse)
        .collect();
    parsed.sort();
    assert_eq!(parsed[0], day(1900, 1, 1));
    assert_eq!(parsed[1], day(2024, 3, 5));
    assert!(parsed[2].is_unparsable());
    assert!(parsed[3].is_unparsable());
}

#[test]
fn canonical_form_parses_back_to_the_same_date() {
    for date in [
        StoryDate::new(2024, 3, 5),
        StoryDate::new(1999, 12, 31),
        StoryDate::new(2030, 1, 1),
    ] {
        assert_eq!(parse(&date.canonical()), ParsedDate::Day(date));
    }
}

#[test]
fn local_clock_parser_matches_explicit_year() {
    let parser = DateParser::from_local_clock();
    let explicit = DateParser::new(parser.current_year());
    assert_eq!(parser.parse("march"), explicit.parse("march"));
}
