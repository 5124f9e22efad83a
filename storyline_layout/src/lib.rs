// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storyline_layout --heading-base-level=0

//! Storyline Layout: from visible events to render primitives.
//!
//! Given the filtered events, a [`DateAxis`](storyline_axis::DateAxis) built
//! from them, and the view size and zoom, [`LayoutEngine::layout`] produces a
//! [`TimelineFrame`]: the axis baseline and ticks, one marker per dated event,
//! and the legend. The frame is plain data; painting it is up to the host.
//!
//! ## Stacking
//!
//! Events sharing a date are stacked downwards from the baseline in the order
//! they appear in the filtered list. Marker `k` of a group sits
//! `k × (2·radius + gap)` below the baseline, where the radius scales with the
//! zoom and the gap never drops below a configured minimum. Given the same
//! filtered order, stacks come out identical on every redraw.
//!
//! ## Colors
//!
//! Characters and locations receive colors from two independent
//! [`ColorAssigner`] memos, in first-seen order. A non-empty
//! [`HighlightSet`] dims every event that has none of the highlighted
//! characters, including events with no characters at all.
//!
//! ## Images
//!
//! Markers show the first image that loads from the chain *event image →
//! first character's portrait → location's picture*, through a
//! [`ThumbnailCache`](storyline_thumbnail::ThumbnailCache). The same chain is
//! exposed as [`image_candidates`] and [`resolve_thumbnail`] for hover and
//! detail surfaces.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use storyline_axis::{AxisConfig, DateAxis};
//! use storyline_date::DateParser;
//! use storyline_layout::{DatedEvent, Event, HighlightSet, LayoutEngine, LayoutRequest, Roster};
//! use storyline_thumbnail::ThumbnailCache;
//!
//! let parser = DateParser::new(2024);
//! let events = [
//!     Event::new("Arrival", "1 jan").with_characters(["Ada"]),
//!     Event::new("Storm", "1 jan"),
//!     Event::new("Departure", "3 jan"),
//! ];
//! let dated: Vec<_> = events
//!     .iter()
//!     .enumerate()
//!     .map(|(i, event)| DatedEvent { filtered_index: i, event, date: parser.parse(&event.date) })
//!     .collect();
//!
//! let size = Size::new(800.0, 600.0);
//! let axis = DateAxis::build(dated.iter().map(|d| d.date), size.width, 0.0, &AxisConfig::default());
//! let highlight = HighlightSet::new();
//! let request = LayoutRequest {
//!     events: &dated,
//!     axis: &axis,
//!     size,
//!     zoom: 1.0,
//!     roster: Roster::default(),
//!     highlight: &highlight,
//! };
//!
//! let mut engine = LayoutEngine::default();
//! let frame = engine.layout(&request, &mut ThumbnailCache::new());
//!
//! assert_eq!(frame.ticks.len(), 2);
//! assert_eq!(frame.markers.len(), 3);
//! // The second event on 1 jan stacks under the first.
//! assert_eq!(frame.markers[1].center(), Point::new(80.0, 300.0 + 32.0));
//! assert_eq!(frame.marker_at(Point::new(80.0, 332.0)).map(|m| m.filtered_index), Some(1));
//! ```

mod config;
mod frame;
mod highlight;
mod images;
mod layout;
mod model;
mod palette;

pub use config::{LayoutColors, LayoutConfig, LegendConfig};
pub use frame::{
    Badge, ImagePlacement, Label, Legend, LegendRow, LegendSection, LegendSwatch, MarkerLayout,
    TextAlign, TextRole, Tick, TimelineFrame, TimelineFrameDebugInfo,
};
pub use highlight::HighlightSet;
pub use images::{image_candidates, resolve_thumbnail};
pub use layout::{DatedEvent, LayoutEngine, LayoutRequest, stack_slots};
pub use model::{Character, Event, Location, Roster};
pub use palette::{ColorAssigner, default_character_palette, default_location_palette};
