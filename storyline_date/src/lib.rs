// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storyline_date --heading-base-level=0

//! Storyline Date: heuristic free-text date parsing.
//!
//! Authors type event dates however they like: `2024/03/05`, `5/3/24`,
//! `5 mars 2024`, `march`. This crate turns that text into a normalized
//! [`StoryDate`] (a plain year/month/day triple) or, when nothing matches,
//! [`ParsedDate::Unparsable`], which always sorts after every real date.
//!
//! Patterns are tried in order and the first match wins:
//!
//! 1. `YYYY<sep>M<sep>D` with `sep` one of `/`, `-`, `.` or whitespace.
//! 2. `D<sep>M[<sep>Y]`, missing year defaulting to the current year.
//! 3. `D <month-name>[ Y]` using a fixed English/Swedish month table.
//! 4. `<month-name>[ Y]`, day defaulting to 1.
//!
//! Two- and three-digit years are folded: below 50 becomes `20yy`, below 100
//! becomes `19yy`. Months and days are clamped into `1..=12` and `1..=31`;
//! the parser never consults a calendar, so `31/2/2024` is accepted as is.
//!
//! ## Minimal example
//!
//! ```rust
//! use storyline_date::{DateParser, ParsedDate, StoryDate};
//!
//! let parser = DateParser::new(2024);
//!
//! assert_eq!(parser.parse("2024/03/05"), ParsedDate::Day(StoryDate::new(2024, 3, 5)));
//! assert_eq!(parser.parse("5 mar"), ParsedDate::Day(StoryDate::new(2024, 3, 5)));
//! assert_eq!(parser.parse("sometime"), ParsedDate::Unparsable);
//!
//! // Unparsable text sorts last.
//! assert!(parser.parse("sometime") > parser.parse("9999-12-31"));
//!
//! // Dates are written back in their canonical `D/M/YYYY` form.
//! assert_eq!(StoryDate::new(2024, 3, 5).canonical(), "5/3/2024");
//! ```
//!
//! The parser is pure: the only ambient input, the current year, is injected
//! through [`DateParser::new`] or read once by [`DateParser::from_local_clock`].

mod date;
mod month;
mod parser;

pub use date::{ParsedDate, StoryDate};
pub use month::month_from_name;
pub use parser::{DateParser, parse_date};
