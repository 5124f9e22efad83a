// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Month names and abbreviations, English and Swedish, lower-case.
const MONTHS: &[(&str, u8)] = &[
    ("jan", 1),
    ("januari", 1),
    ("january", 1),
    ("feb", 2),
    ("februari", 2),
    ("february", 2),
    ("mar", 3),
    ("mars", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("maj", 5),
    ("may", 5),
    ("jun", 6),
    ("juni", 6),
    ("june", 6),
    ("jul", 7),
    ("juli", 7),
    ("july", 7),
    ("aug", 8),
    ("augusti", 8),
    ("august", 8),
    ("sep", 9),
    ("sept", 9),
    ("september", 9),
    ("okt", 10),
    ("oktober", 10),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
];

/// Looks up a month number by name.
///
/// Matching is case-insensitive and ignores trailing periods, so `"Sept."`
/// and `"sept"` both yield `Some(9)`.
///
/// ```rust
/// use storyline_date::month_from_name;
///
/// assert_eq!(month_from_name("Mars"), Some(3));
/// assert_eq!(month_from_name("okt."), Some(10));
/// assert_eq!(month_from_name("smarch"), None);
/// ```
#[must_use]
pub fn month_from_name(name: &str) -> Option<u8> {
    let name = name.trim().trim_end_matches('.').to_lowercase();
    MONTHS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, month)| month)
}

#[cfg(test)]
mod tests {
    use super::{MONTHS, month_from_name};

    #[test]
    fn every_month_has_an_entry() {
        for month in 1..=12 {
            assert!(
                MONTHS.iter().any(|&(_, m)| m == month),
                "month {month} missing from table"
            );
        }
    }

    #[test]
    fn swedish_and_english_spellings_agree() {
        assert_eq!(month_from_name("maj"), month_from_name("may"));
        assert_eq!(month_from_name("oktober"), month_from_name("october"));
        assert_eq!(month_from_name("augusti"), Some(8));
    }

    #[test]
    fn trailing_periods_are_ignored() {
        assert_eq!(month_from_name("dec."), Some(12));
        assert_eq!(month_from_name("dec.."), Some(12));
        assert_eq!(month_from_name("."), None);
    }
}
