// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use storyline_date::{ParsedDate, StoryDate};

/// Horizontal layout parameters of the date axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisConfig {
    /// Distance in pixels between the view edges and the first/last date.
    pub margin: f64,
    /// Lower bound for the width the dates are spread across.
    ///
    /// Keeps adjacent dates apart in very narrow views.
    pub min_usable_width: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            margin: 80.0,
            min_usable_width: 40.0,
        }
    }
}

impl AxisConfig {
    /// Returns a copy with a different margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Ordered distinct dates mapped to horizontal view positions.
///
/// A `DateAxis` is rebuilt from scratch on every redraw. Dates are evenly
/// spaced regardless of how many days lie between them; the axis is an
/// ordinal scale, not a linear time scale.
///
/// - No dates: nothing maps anywhere.
/// - One date: it sits at the horizontal center of the view, plus pan.
/// - `N > 1` dates: the first sits at `margin + pan`, the rest follow at a
///   fixed step so that the last one lands `margin` before the right edge
///   (before panning).
#[derive(Clone, Debug, PartialEq)]
pub struct DateAxis {
    dates: Vec<StoryDate>,
    view_width: f64,
    margin: f64,
    start_x: f64,
    step: f64,
}

impl Default for DateAxis {
    fn default() -> Self {
        Self::empty()
    }
}

impl DateAxis {
    /// Creates an axis with no dates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            dates: Vec::new(),
            view_width: 0.0,
            margin: 0.0,
            start_x: 0.0,
            step: 0.0,
        }
    }

    /// Builds the axis for the given parsed dates.
    ///
    /// Unparsable entries are skipped and duplicates collapse, so the
    /// resulting date list is strictly ascending.
    #[must_use]
    pub fn build<I>(dates: I, view_width: f64, pan: f64, config: &AxisConfig) -> Self
    where
        I: IntoIterator<Item = ParsedDate>,
    {
        let mut dates: Vec<StoryDate> = dates.into_iter().filter_map(ParsedDate::day).collect();
        dates.sort_unstable();
        dates.dedup();

        let usable = (view_width - 2.0 * config.margin).max(config.min_usable_width);
        let (start_x, step) = match dates.len() {
            0 => (config.margin + pan, 0.0),
            1 => (view_width * 0.5 + pan, 0.0),
            n => (config.margin + pan, usable / (n - 1) as f64),
        };

        Self {
            dates,
            view_width,
            margin: config.margin,
            start_x,
            step,
        }
    }

    /// Returns the distinct dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[StoryDate] {
        &self.dates
    }

    /// Returns the number of distinct dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` if the axis has no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the pixel distance between adjacent dates (zero for fewer
    /// than two dates).
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the view width the axis was built for.
    #[must_use]
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    /// Returns the `(start, end)` x extent of the axis baseline.
    ///
    /// The baseline spans the view between the margins and does not follow
    /// the pan offset.
    #[must_use]
    pub fn baseline(&self) -> (f64, f64) {
        (self.margin, self.view_width - self.margin)
    }

    /// Returns the x position of the date at `index`.
    #[must_use]
    pub fn index_to_x(&self, index: usize) -> Option<f64> {
        (index < self.dates.len()).then(|| self.start_x + index as f64 * self.step)
    }

    /// Maps a date to its x position.
    ///
    /// Dates not on the axis map to the position of the axis date with the
    /// smallest day distance (the earlier one on ties). With a single date on
    /// the axis every query returns its position.
    #[must_use]
    pub fn date_to_x(&self, date: StoryDate) -> Option<f64> {
        match self.dates.len() {
            0 => None,
            1 => Some(self.start_x),
            _ => {
                let index = self
                    .dates
                    .binary_search(&date)
                    .unwrap_or_else(|_| self.nearest_index(date));
                self.index_to_x(index)
            }
        }
    }

    /// Maps an x position to the nearest axis date.
    ///
    /// Positions before the first or after the last date clamp to those
    /// dates. Returns `None` only when the axis is empty.
    #[must_use]
    pub fn x_to_date(&self, x: f64) -> Option<StoryDate> {
        let last = self.dates.len().checked_sub(1)?;
        if last == 0 {
            return self.dates.first().copied();
        }
        let step = if self.step > 0.0 { self.step } else { 1.0 };
        let index = ((x - self.start_x) / step).round().clamp(0.0, last as f64);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "index is rounded and clamped to the date range first"
        )]
        let index = index as usize;
        self.dates.get(index).copied()
    }

    /// Convenience conversion from a `Point`, using its X coordinate.
    #[must_use]
    pub fn point_to_date(&self, pt: Point) -> Option<StoryDate> {
        self.x_to_date(pt.x)
    }

    /// Iterates over `(date, x)` pairs in ascending date order.
    pub fn ticks(&self) -> impl Iterator<Item = (StoryDate, f64)> + '_ {
        self.dates
            .iter()
            .enumerate()
            .map(|(index, &date)| (date, self.start_x + index as f64 * self.step))
    }

    /// Snapshot of the current axis state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DateAxisDebugInfo {
        DateAxisDebugInfo {
            date_count: self.dates.len(),
            first: self.dates.first().copied(),
            last: self.dates.last().copied(),
            view_width: self.view_width,
            start_x: self.start_x,
            step: self.step,
        }
    }

    fn nearest_index(&self, date: StoryDate) -> usize {
        self.dates
            .iter()
            .enumerate()
            .min_by_key(|(_, candidate)| candidate.days_between(date))
            .map_or(0, |(index, _)| index)
    }
}

/// Debug snapshot of a [`DateAxis`].
#[derive(Clone, Debug, PartialEq)]
pub struct DateAxisDebugInfo {
    /// Number of distinct dates on the axis.
    pub date_count: usize,
    /// Earliest date, if any.
    pub first: Option<StoryDate>,
    /// Latest date, if any.
    pub last: Option<StoryDate>,
    /// View width the axis was built for.
    pub view_width: f64,
    /// X position of the first date.
    pub start_x: f64,
    /// Distance between adjacent dates.
    pub step: f64,
}
