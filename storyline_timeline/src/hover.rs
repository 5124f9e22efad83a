// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use storyline_layout::{Event, Roster, resolve_thumbnail};
use storyline_thumbnail::{Thumbnail, ThumbnailCache, ThumbnailDecoder, ThumbnailSize};

use crate::store::EventId;

/// Transient preview shown while the pointer rests on a marker.
#[derive(Clone, Debug)]
pub struct HoverPreview {
    /// Store identity of the event.
    pub event: EventId,
    /// Filtered position of the event.
    pub filtered_index: usize,
    /// Event title.
    pub title: String,
    /// Date text as the author wrote it.
    pub date: String,
    /// Activity, possibly empty.
    pub activity: String,
    /// First image of the event's fallback chain that loads.
    pub thumbnail: Option<Thumbnail>,
    /// Top-left corner of the preview in view coordinates.
    pub origin: Point,
}

impl HoverPreview {
    pub(crate) fn new<D: ThumbnailDecoder>(
        id: EventId,
        filtered_index: usize,
        event: &Event,
        roster: Roster<'_>,
        thumbnails: &mut ThumbnailCache<D>,
        size: ThumbnailSize,
        origin: Point,
    ) -> Self {
        Self {
            event: id,
            filtered_index,
            title: event.title.clone(),
            date: event.date.clone(),
            activity: event.activity.clone(),
            thumbnail: resolve_thumbnail(thumbnails, event, roster, size),
            origin,
        }
    }

    /// Text lines: title, date, and the activity when there is one.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![self.title.as_str(), self.date.as_str()];
        if !self.activity.trim().is_empty() {
            lines.push(self.activity.as_str());
        }
        lines
    }
}
