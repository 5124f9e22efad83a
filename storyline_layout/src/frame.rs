// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render primitives produced by a layout pass.
//!
//! A [`TimelineFrame`] is plain data: geometry in view coordinates, resolved
//! colors, text anchors and thumbnail handles. Hosts paint it however they
//! like and use its hit-testing helpers to route pointer input.

use kurbo::{Circle, Line, Point, Rect, Shape, Size};
use peniko::Color;
use smallvec::SmallVec;
use storyline_date::StoryDate;
use storyline_thumbnail::Thumbnail;

/// What a piece of text is, so hosts can pick a font for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextRole {
    /// Event title above a marker.
    MarkerTitle,
    /// Event activity under the title.
    MarkerActivity,
    /// Date label above a tick.
    TickDate,
    /// "Characters" / "Locations" legend heading.
    LegendHeading,
    /// A name in the legend.
    LegendEntry,
}

/// How a [`Label`]'s anchor relates to the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// The anchor is the center of the text.
    Center,
    /// The anchor is the top-left corner of the text.
    TopLeft,
}

/// A positioned piece of text.
#[derive(Clone, Debug)]
pub struct Label {
    /// The text.
    pub text: String,
    /// Anchor point in view coordinates.
    pub anchor: Point,
    /// Anchor interpretation.
    pub align: TextAlign,
    /// Text role.
    pub role: TextRole,
    /// Text color.
    pub color: Color,
    /// Estimated area covered by the text, used for hit testing.
    pub bounds: Rect,
}

impl Label {
    /// Creates a label whose hit area is `extent` placed at `anchor`
    /// according to `align`.
    #[must_use]
    pub fn new(
        text: String,
        anchor: Point,
        align: TextAlign,
        role: TextRole,
        color: Color,
        extent: Size,
    ) -> Self {
        let bounds = match align {
            TextAlign::Center => Rect::from_center_size(anchor, extent),
            TextAlign::TopLeft => Rect::from_origin_size(anchor, extent),
        };
        Self {
            text,
            anchor,
            align,
            role,
            color,
            bounds,
        }
    }
}

/// A thumbnail placed in view coordinates.
#[derive(Clone, Debug)]
pub struct ImagePlacement {
    /// Shared bitmap handle.
    pub thumbnail: Thumbnail,
    /// Area covered by the bitmap at its natural size.
    pub rect: Rect,
}

impl ImagePlacement {
    /// Places `thumbnail` with its left edge at `x`, vertically centered on
    /// `center_y`.
    #[must_use]
    pub fn left_center(thumbnail: Thumbnail, x: f64, center_y: f64) -> Self {
        let w = f64::from(thumbnail.width());
        let h = f64::from(thumbnail.height());
        let rect = Rect::new(x, center_y - h / 2.0, x + w, center_y + h / 2.0);
        Self { thumbnail, rect }
    }

    /// Places `thumbnail` centered on `center`.
    #[must_use]
    pub fn centered(thumbnail: Thumbnail, center: Point) -> Self {
        let size = Size::new(f64::from(thumbnail.width()), f64::from(thumbnail.height()));
        let rect = Rect::from_center_size(center, size);
        Self { thumbnail, rect }
    }
}

/// One character badge under a marker.
#[derive(Clone, Debug)]
pub struct Badge {
    /// Badge disc.
    pub circle: Circle,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub outline: Color,
    /// Character the badge stands for.
    pub character: String,
}

/// Everything drawn for one event.
#[derive(Clone, Debug)]
pub struct MarkerLayout {
    /// Position of the event in the filtered list the frame was built from.
    pub filtered_index: usize,
    /// Parsed date of the event.
    pub date: StoryDate,
    /// Position within the stack of events sharing `date`, starting at 0.
    pub stack_slot: usize,
    /// The marker disc.
    pub circle: Circle,
    /// Fill color.
    pub fill: Color,
    /// Outline color.
    pub outline: Color,
    /// Outline width.
    pub outline_width: f64,
    /// Whether a highlight excludes this event.
    pub dimmed: bool,
    /// Title above the marker.
    pub title: Label,
    /// Activity under the title, when the event has one.
    pub activity: Option<Label>,
    /// Thumbnail to the right of the marker.
    pub thumbnail: Option<ImagePlacement>,
    /// Character badges, left to right.
    pub badges: SmallVec<[Badge; 4]>,
}

impl MarkerLayout {
    /// Center of the marker disc.
    #[must_use]
    pub fn center(&self) -> Point {
        self.circle.center
    }

    /// Returns `true` if `pt` is over the disc, a label, the thumbnail or a
    /// badge.
    #[must_use]
    pub fn hit(&self, pt: Point) -> bool {
        self.circle.contains(pt)
            || self.title.bounds.contains(pt)
            || self
                .activity
                .as_ref()
                .is_some_and(|label| label.bounds.contains(pt))
            || self
                .thumbnail
                .as_ref()
                .is_some_and(|image| image.rect.contains(pt))
            || self.badges.iter().any(|badge| badge.circle.contains(pt))
    }
}

/// One tick on the axis.
#[derive(Clone, Debug)]
pub struct Tick {
    /// Date the tick stands for.
    pub date: StoryDate,
    /// Horizontal position.
    pub x: f64,
    /// Vertical tick mark.
    pub line: Line,
    /// Canonical date text above the tick.
    pub label: Label,
}

/// The visual in front of a legend name.
#[derive(Clone, Debug)]
pub enum LegendSwatch {
    /// Character portrait.
    Thumbnail(ImagePlacement),
    /// Filled dot in the character's color.
    Dot {
        /// Dot geometry.
        circle: Circle,
        /// Fill color.
        fill: Color,
        /// Outline color.
        outline: Color,
    },
    /// Ring in the location's color.
    Ring {
        /// Ring geometry.
        circle: Circle,
        /// Stroke color.
        stroke: Color,
        /// Stroke width.
        width: f64,
    },
}

/// Which legend section a row belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LegendSection {
    /// Character rows; these respond to clicks.
    Characters,
    /// Location rows.
    Locations,
}

/// One legend entry.
#[derive(Clone, Debug)]
pub struct LegendRow {
    /// Section of the row.
    pub section: LegendSection,
    /// Record name.
    pub name: String,
    /// Swatch in front of the name.
    pub swatch: LegendSwatch,
    /// The name.
    pub label: Label,
    /// Hit area of the row.
    pub bounds: Rect,
}

/// The legend block.
#[derive(Clone, Debug, Default)]
pub struct Legend {
    /// Padded background rectangle; `None` when there are no rows.
    pub background: Option<Rect>,
    /// Section headings.
    pub headings: Vec<Label>,
    /// Rows in drawing order.
    pub rows: Vec<LegendRow>,
}

impl Legend {
    /// Returns `true` if the legend has nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Name of the character row containing `pt`.
    #[must_use]
    pub fn character_at(&self, pt: Point) -> Option<&str> {
        self.rows
            .iter()
            .filter(|row| row.section == LegendSection::Characters)
            .find(|row| row.bounds.contains(pt))
            .map(|row| row.name.as_str())
    }
}

/// Snapshot of a frame's shape for debugging and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineFrameDebugInfo {
    /// View size.
    pub size: Size,
    /// Zoom the frame was laid out at.
    pub zoom: f64,
    /// Number of ticks.
    pub tick_count: usize,
    /// Number of markers.
    pub marker_count: usize,
    /// Number of dimmed markers.
    pub dimmed_count: usize,
    /// Number of legend rows.
    pub legend_rows: usize,
}

/// Everything one redraw produces.
#[derive(Clone, Debug)]
pub struct TimelineFrame {
    /// View size the frame was laid out for.
    pub size: Size,
    /// Zoom the frame was laid out at.
    pub zoom: f64,
    /// Vertical position of the axis.
    pub baseline_y: f64,
    /// Axis line from the left margin to the right margin.
    pub baseline: Line,
    /// Axis baseline stroke width.
    pub baseline_width: f64,
    /// Baseline color.
    pub baseline_color: Color,
    /// Tick color.
    pub tick_color: Color,
    /// One tick per axis date.
    pub ticks: Vec<Tick>,
    /// One marker per event with a parsable date, in filtered order.
    pub markers: Vec<MarkerLayout>,
    /// Legend block.
    pub legend: Legend,
}

impl TimelineFrame {
    /// The topmost marker under `pt`.
    ///
    /// Markers are drawn in filtered order, so the last hit wins.
    #[must_use]
    pub fn marker_at(&self, pt: Point) -> Option<&MarkerLayout> {
        self.markers.iter().rev().find(|marker| marker.hit(pt))
    }

    /// The legend character under `pt`.
    #[must_use]
    pub fn legend_character_at(&self, pt: Point) -> Option<&str> {
        self.legend.character_at(pt)
    }

    /// The marker laid out for the event at `filtered_index`.
    #[must_use]
    pub fn marker_for(&self, filtered_index: usize) -> Option<&MarkerLayout> {
        self.markers
            .iter()
            .find(|marker| marker.filtered_index == filtered_index)
    }

    /// Returns a snapshot of the frame's shape.
    #[must_use]
    pub fn debug_info(&self) -> TimelineFrameDebugInfo {
        TimelineFrameDebugInfo {
            size: self.size,
            zoom: self.zoom,
            tick_count: self.ticks.len(),
            marker_count: self.markers.len(),
            dimmed_count: self.markers.iter().filter(|m| m.dimmed).count(),
            legend_rows: self.legend.rows.len(),
        }
    }
}
