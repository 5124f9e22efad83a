// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use peniko::Color;
use storyline_thumbnail::ThumbnailSize;

/// Fixed colors used by the layout, apart from the assigned palettes.
#[derive(Copy, Clone, Debug)]
pub struct LayoutColors {
    /// Axis baseline.
    pub baseline: Color,
    /// Tick marks and their date labels.
    pub tick: Color,
    /// Marker labels and legend text.
    pub label: Color,
    /// Marker labels of dimmed events.
    pub dimmed_label: Color,
    /// Marker fill when the event has no characters.
    pub neutral: Color,
    /// Marker fill of dimmed events.
    pub dimmed_fill: Color,
    /// Marker outline of dimmed events.
    pub dimmed_outline: Color,
    /// Badge outline.
    pub badge_outline: Color,
    /// Badge fill of dimmed events.
    pub dimmed_badge: Color,
    /// Legend background.
    pub legend_background: Color,
    /// Legend border.
    pub legend_border: Color,
    /// Outline of legend color dots.
    pub legend_dot_outline: Color,
}

impl Default for LayoutColors {
    fn default() -> Self {
        Self {
            baseline: Color::from_rgb8(0x44, 0x44, 0x44),
            tick: Color::from_rgb8(0x77, 0x77, 0x77),
            label: Color::from_rgb8(0x00, 0x00, 0x00),
            dimmed_label: Color::from_rgb8(0x99, 0x99, 0x99),
            neutral: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            dimmed_fill: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            dimmed_outline: Color::from_rgb8(0xcc, 0xcc, 0xcc),
            badge_outline: Color::from_rgb8(0x22, 0x22, 0x22),
            dimmed_badge: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            legend_background: Color::from_rgb8(0xff, 0xff, 0xff),
            legend_border: Color::from_rgb8(0xdd, 0xdd, 0xdd),
            legend_dot_outline: Color::from_rgb8(0x22, 0x22, 0x22),
        }
    }
}

/// Geometry of the legend block in the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegendConfig {
    /// Top-left corner of the first heading.
    pub origin: Point,
    /// Vertical advance per heading or row.
    pub line_height: f64,
    /// Radius of the color dots and location rings.
    pub dot_radius: f64,
    /// Space between a swatch and its name.
    pub text_gap: f64,
    /// Extra space between the two sections.
    pub section_gap: f64,
    /// Width of a row's hit area.
    pub row_width: f64,
    /// Box for character portraits.
    pub thumbnail: ThumbnailSize,
    /// Padding of the background rectangle around the rows.
    pub padding: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(12.0, 12.0),
            line_height: 18.0,
            dot_radius: 6.0,
            text_gap: 6.0,
            section_gap: 6.0,
            row_width: 160.0,
            thumbnail: ThumbnailSize::square(22),
            padding: 8.0,
        }
    }
}

/// Sizes and offsets of everything the layout places.
///
/// Radii and gaps marked "base" are multiplied by the zoom factor.
#[derive(Copy, Clone, Debug)]
pub struct LayoutConfig {
    /// Marker radius at zoom 1.
    pub base_radius: f64,
    /// Gap between stacked markers at zoom 1.
    pub base_gap: f64,
    /// Lower bound for the stacking gap.
    pub min_gap: f64,
    /// Marker outline width.
    pub outline_width: f64,
    /// Horizontal distance between a marker's edge and its thumbnail.
    pub thumbnail_gap: f64,
    /// Box for marker thumbnails.
    pub marker_thumbnail: ThumbnailSize,
    /// Distance between the marker top and the title anchor.
    pub title_offset: f64,
    /// Distance below the marker top of the activity anchor.
    pub activity_offset: f64,
    /// Badge radius at zoom 1.
    pub badge_base_radius: f64,
    /// Lower bound for the badge radius.
    pub badge_min_radius: f64,
    /// Gap between adjacent badges.
    pub badge_gap: f64,
    /// Distance between the marker bottom and the badge row.
    pub badge_offset: f64,
    /// Axis baseline stroke width.
    pub baseline_width: f64,
    /// Half the height of a tick mark.
    pub tick_half_height: f64,
    /// Distance above the baseline of a tick's date label.
    pub tick_label_offset: f64,
    /// Estimated advance of one character, for label hit areas.
    pub text_char_width: f64,
    /// Estimated height of one line of text, for label hit areas.
    pub text_line_height: f64,
    /// Legend geometry.
    pub legend: LegendConfig,
    /// Fixed colors.
    pub colors: LayoutColors,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_radius: 12.0,
            base_gap: 6.0,
            min_gap: 8.0,
            outline_width: 3.0,
            thumbnail_gap: 10.0,
            marker_thumbnail: ThumbnailSize::square(40),
            title_offset: 2.0,
            activity_offset: 12.0,
            badge_base_radius: 5.0,
            badge_min_radius: 4.0,
            badge_gap: 2.0,
            badge_offset: 8.0,
            baseline_width: 2.0,
            tick_half_height: 8.0,
            tick_label_offset: 24.0,
            text_char_width: 7.0,
            text_line_height: 14.0,
            legend: LegendConfig::default(),
            colors: LayoutColors::default(),
        }
    }
}

impl LayoutConfig {
    /// Marker radius at `zoom`.
    #[must_use]
    pub fn radius(&self, zoom: f64) -> f64 {
        self.base_radius * zoom
    }

    /// Stacking gap at `zoom`.
    #[must_use]
    pub fn gap(&self, zoom: f64) -> f64 {
        self.min_gap.max(self.base_gap * zoom)
    }

    /// Vertical distance between the centers of two stacked markers.
    #[must_use]
    pub fn stack_step(&self, zoom: f64) -> f64 {
        2.0 * self.radius(zoom) + self.gap(zoom)
    }

    /// Badge radius at `zoom`.
    #[must_use]
    pub fn badge_radius(&self, zoom: f64) -> f64 {
        self.badge_min_radius.max(self.badge_base_radius * zoom)
    }

    /// Estimated size of `text` on one line.
    ///
    /// Hosts paint text with real font metrics; this is only used to give
    /// labels a hit area.
    #[must_use]
    pub fn text_extent(&self, text: &str) -> Size {
        Size::new(
            text.chars().count() as f64 * self.text_char_width,
            self.text_line_height,
        )
    }
}
