// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use storyline_axis::{AxisConfig, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use storyline_layout::LayoutConfig;
use storyline_thumbnail::ThumbnailSize;

/// Everything tunable about a [`TimelineView`](crate::TimelineView).
#[derive(Copy, Clone, Debug)]
pub struct TimelineConfig {
    /// Horizontal axis layout.
    pub axis: AxisConfig,
    /// Marker, tick and legend layout.
    pub layout: LayoutConfig,
    /// Zoom multiplier per wheel step away from the user.
    pub zoom_in_factor: f64,
    /// Zoom multiplier per wheel step towards the user.
    pub zoom_out_factor: f64,
    /// Smallest zoom.
    pub min_zoom: f64,
    /// Largest zoom.
    pub max_zoom: f64,
    /// Offset of the hover preview from the cursor.
    pub hover_offset: Vec2,
    /// Box for the hover preview image.
    pub hover_thumbnail: ThumbnailSize,
    /// Box for the detail view's primary image.
    pub detail_image: ThumbnailSize,
    /// Box for the detail view's thumbnail strip.
    pub strip_thumbnail: ThumbnailSize,
    /// Half the height of the vertical guide shown while dragging a marker.
    pub guide_half_height: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            axis: AxisConfig::default(),
            layout: LayoutConfig::default(),
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            hover_offset: Vec2::new(16.0, 16.0),
            hover_thumbnail: ThumbnailSize::square(100),
            detail_image: ThumbnailSize::square(520),
            strip_thumbnail: ThumbnailSize::square(80),
            guide_half_height: 20.0,
        }
    }
}

impl TimelineConfig {
    /// Returns a copy with different zoom limits.
    #[must_use]
    pub fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Returns a copy with a different axis margin.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.axis = self.axis.with_margin(margin);
        self
    }
}
