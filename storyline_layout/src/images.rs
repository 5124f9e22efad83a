// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use storyline_thumbnail::{Thumbnail, ThumbnailCache, ThumbnailDecoder, ThumbnailSize};

use crate::model::{Event, Roster};

/// Image paths to try for `event`, most specific first.
///
/// The chain is the event's own image, then the first character's portrait,
/// then the location's picture. Blank and unresolvable references are left
/// out.
#[must_use]
pub fn image_candidates<'a>(event: &'a Event, roster: Roster<'a>) -> SmallVec<[&'a str; 3]> {
    let mut candidates = SmallVec::new();
    if let Some(path) = event.image_path() {
        candidates.push(path);
    }
    if let Some(path) = event
        .first_character()
        .and_then(|name| roster.character_image(name))
    {
        candidates.push(path);
    }
    if let Some(path) = roster.location_image(&event.location) {
        candidates.push(path);
    }
    candidates
}

/// The first candidate image of `event` that loads, fitted into `size`.
///
/// A candidate that fails to load falls through to the next one.
pub fn resolve_thumbnail<D: ThumbnailDecoder>(
    cache: &mut ThumbnailCache<D>,
    event: &Event,
    roster: Roster<'_>,
    size: ThumbnailSize,
) -> Option<Thumbnail> {
    image_candidates(event, roster)
        .into_iter()
        .find_map(|path| cache.get_sized(path, size))
}
