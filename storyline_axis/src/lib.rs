// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storyline_axis --heading-base-level=0

//! Storyline Axis: the date axis of a timeline view.
//!
//! This crate provides two small, headless pieces of state:
//! - [`DateAxis`]: the ascending list of distinct dates currently shown and
//!   the mapping between those dates and horizontal view positions.
//! - [`AxisViewport`]: the pan offset and the clamped zoom factor the user
//!   controls with gestures.
//!
//! The axis is ordinal: dates are spaced evenly between the view margins no
//! matter how far apart they are in time. It is rebuilt from scratch whenever
//! anything it depends on changes (view width, pan, the visible event set).
//!
//! ## Minimal example
//!
//! ```rust
//! use storyline_axis::{AxisConfig, AxisViewport, DateAxis};
//! use storyline_date::{DateParser, StoryDate};
//!
//! let parser = DateParser::new(2024);
//! let dates = ["1 jan", "garbage", "3 jan", "2 jan", "1 jan"].map(|t| parser.parse(t));
//!
//! let mut viewport = AxisViewport::new();
//! viewport.pan_by_view(20.0);
//!
//! let axis = DateAxis::build(dates, 800.0, viewport.pan(), &AxisConfig::default());
//! assert_eq!(axis.len(), 3);
//!
//! // The first date sits at margin + pan.
//! assert_eq!(axis.date_to_x(StoryDate::new(2024, 1, 1)), Some(100.0));
//!
//! // Positions map back to the nearest date.
//! assert_eq!(axis.x_to_date(420.0), Some(StoryDate::new(2024, 1, 2)));
//! ```

mod axis;
mod viewport;

pub use axis::{AxisConfig, DateAxis, DateAxisDebugInfo};
pub use viewport::{AxisViewport, AxisViewportDebugInfo, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
