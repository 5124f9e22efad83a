// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `storyline_axis` crate.
//!
//! These cover the three axis regimes (empty, single date, many dates) and
//! how pan and resize move positions around.

use kurbo::Point;
use storyline_axis::{AxisConfig, AxisViewport, DateAxis};
use storyline_date::{ParsedDate, StoryDate};

fn d(year: i32, month: u32, day: u32) -> StoryDate {
    StoryDate::new(year, month, day)
}

fn build(dates: &[StoryDate], width: f64, pan: f64) -> DateAxis {
    DateAxis::build(
        dates.iter().copied().map(ParsedDate::Day),
        width,
        pan,
        &AxisConfig::default(),
    )
}

#[test]
fn empty_axis_maps_nothing() {
    let axis = DateAxis::build([ParsedDate::Unparsable], 800.0, 0.0, &AxisConfig::default());
    assert!(axis.is_empty());
    for x in [-100.0, 0.0, 400.0, 1e9] {
        assert_eq!(axis.x_to_date(x), None);
    }
    assert_eq!(axis.date_to_x(d(2024, 1, 1)), None);
    assert_eq!(axis.ticks().count(), 0);
}

#[test]
fn single_date_is_centered_and_constant() {
    let axis = build(&[d(2024, 6, 1)], 800.0, 0.0);
    let x = axis.date_to_x(d(2024, 6, 1));
    assert_eq!(x, Some(400.0));
    // Every query answers with the only position there is.
    assert_eq!(axis.date_to_x(d(1900, 1, 1)), x);
    assert_eq!(axis.date_to_x(d(2024, 6, 1)), x);
    assert_eq!(axis.x_to_date(0.0), Some(d(2024, 6, 1)));
    assert_eq!(axis.step(), 0.0);
}

#[test]
fn single_date_recenters_on_resize_and_follows_pan() {
    let narrow = build(&[d(2024, 6, 1)], 400.0, 0.0);
    let wide = build(&[d(2024, 6, 1)], 1_000.0, 0.0);
    let panned = build(&[d(2024, 6, 1)], 1_000.0, -30.0);
    assert_eq!(narrow.date_to_x(d(2024, 6, 1)), Some(200.0));
    assert_eq!(wide.date_to_x(d(2024, 6, 1)), Some(500.0));
    assert_eq!(panned.date_to_x(d(2024, 6, 1)), Some(470.0));
}

#[test]
fn many_dates_map_strictly_increasing() {
    let dates = [
        d(2020, 1, 1),
        d(2020, 1, 2),
        d(2021, 7, 4),
        d(2021, 7, 5),
        d(2030, 12, 31),
    ];
    let axis = build(&dates, 1_024.0, 15.0);
    let xs: Vec<f64> = dates.iter().filter_map(|&date| axis.date_to_x(date)).collect();
    assert_eq!(xs.len(), dates.len());
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn x_to_date_inverts_date_to_x() {
    let dates = [d(2020, 1, 1), d(2020, 2, 1), d(2020, 3, 1), d(2020, 4, 1)];
    let axis = build(&dates, 900.0, -45.0);
    for &date in &dates {
        let x = axis.date_to_x(date).unwrap();
        assert_eq!(axis.x_to_date(x), Some(date));
        assert_eq!(axis.x_to_date(x + axis.step() * 0.4), Some(date));
        assert_eq!(axis.point_to_date(Point::new(x, 12_345.0)), Some(date));
    }
}

#[test]
fn pan_shifts_every_tick_by_the_same_amount() {
    let dates = [d(2020, 1, 1), d(2020, 2, 1), d(2020, 3, 1)];
    let mut viewport = AxisViewport::new();
    let before = build(&dates, 800.0, viewport.pan());
    viewport.pan_by_view(37.5);
    let after = build(&dates, 800.0, viewport.pan());

    for ((d0, x0), (d1, x1)) in before.ticks().zip(after.ticks()) {
        assert_eq!(d0, d1);
        assert!((x1 - x0 - 37.5).abs() < 1e-9);
    }
    // The baseline itself stays put.
    assert_eq!(before.baseline(), after.baseline());
}

#[test]
fn debug_info_reports_extent() {
    let axis = build(&[d(2024, 3, 1), d(2023, 3, 1)], 800.0, 0.0);
    let info = axis.debug_info();
    assert_eq!(info.date_count, 2);
    assert_eq!(info.first, Some(d(2023, 3, 1)));
    assert_eq!(info.last, Some(d(2024, 3, 1)));
    assert_eq!(info.step, 640.0);
}
