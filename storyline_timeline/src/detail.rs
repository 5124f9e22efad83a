// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use storyline_layout::{Event, Roster, image_candidates};
use storyline_thumbnail::{Thumbnail, ThumbnailCache, ThumbnailDecoder, ThumbnailSize};

use crate::store::EventId;

/// State of the detail view's large image.
#[derive(Clone, Debug)]
pub enum PrimaryImage {
    /// The image loaded.
    Loaded {
        /// Source path.
        path: String,
        /// Decoded image.
        thumbnail: Thumbnail,
    },
    /// The file exists but could not be decoded.
    Failed {
        /// Source path.
        path: String,
    },
    /// No candidate image exists.
    Missing,
}

impl PrimaryImage {
    /// Placeholder text for hosts to show instead of an image.
    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Self::Loaded { .. } => None,
            Self::Failed { path } => Some(format!("(Could not load image)\n{path}")),
            Self::Missing => Some("(No image)".to_owned()),
        }
    }

    /// Source path of a loaded or failed image.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Loaded { path, .. } | Self::Failed { path } => Some(path),
            Self::Missing => None,
        }
    }
}

/// What a strip entry shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StripKind {
    /// A character portrait.
    Character,
    /// The location's picture.
    Location,
}

/// A clickable thumbnail under the primary image.
#[derive(Clone, Debug)]
pub struct StripImage {
    /// Character or location.
    pub kind: StripKind,
    /// Record name.
    pub name: String,
    /// Source path.
    pub path: String,
    /// Small version of the image.
    pub thumbnail: Thumbnail,
}

/// A named record with its description, as listed in the detail text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailEntry {
    /// Record name.
    pub name: String,
    /// Description, empty when the record is unknown.
    pub description: String,
}

/// Everything shown when a marker is double-clicked.
#[derive(Clone, Debug)]
pub struct DetailView {
    /// Store identity of the event.
    pub event: EventId,
    /// Event title.
    pub title: String,
    /// Date text as written.
    pub date: String,
    /// Attached characters in author order.
    pub characters: Vec<DetailEntry>,
    /// Activity, possibly empty.
    pub activity: String,
    /// Location; the name may be empty.
    pub location: DetailEntry,
    /// The large image.
    pub primary: PrimaryImage,
    /// Clickable thumbnails: characters with a portrait, then the location.
    pub strip: Vec<StripImage>,
    image_size: ThumbnailSize,
}

impl DetailView {
    /// Builds the detail view for `event`.
    ///
    /// The primary image is the first candidate of the fallback chain that
    /// exists on disk. Strip entries whose thumbnail does not load are left
    /// out.
    pub fn open<D: ThumbnailDecoder>(
        id: EventId,
        event: &Event,
        roster: Roster<'_>,
        thumbnails: &mut ThumbnailCache<D>,
        image_size: ThumbnailSize,
        strip_size: ThumbnailSize,
    ) -> Self {
        let describe_character = |name: &str| DetailEntry {
            name: name.to_owned(),
            description: roster
                .character(name)
                .map(|c| c.description.clone())
                .unwrap_or_default(),
        };
        let characters = event
            .characters
            .iter()
            .map(|name| describe_character(name))
            .collect();
        let location = DetailEntry {
            name: event.location.clone(),
            description: roster
                .location(&event.location)
                .map(|l| l.description.clone())
                .unwrap_or_default(),
        };

        let primary = image_candidates(event, roster)
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map_or(PrimaryImage::Missing, |path| {
                load_primary(thumbnails, path, image_size)
            });

        let mut strip = Vec::new();
        for name in &event.characters {
            if let Some(path) = roster.character_image(name)
                && let Some(thumbnail) = thumbnails.get_sized(path, strip_size)
            {
                strip.push(StripImage {
                    kind: StripKind::Character,
                    name: name.clone(),
                    path: path.to_owned(),
                    thumbnail,
                });
            }
        }
        if let Some(path) = roster.location_image(&event.location)
            && let Some(thumbnail) = thumbnails.get_sized(path, strip_size)
        {
            strip.push(StripImage {
                kind: StripKind::Location,
                name: event.location.clone(),
                path: path.to_owned(),
                thumbnail,
            });
        }

        Self {
            event: id,
            title: event.title.clone(),
            date: event.date.clone(),
            characters,
            activity: event.activity.clone(),
            location,
            primary,
            strip,
            image_size,
        }
    }

    /// Shows strip entry `index` as the primary image.
    ///
    /// Returns `false` if there is no such entry.
    pub fn select_thumbnail<D: ThumbnailDecoder>(
        &mut self,
        index: usize,
        thumbnails: &mut ThumbnailCache<D>,
    ) -> bool {
        let Some(entry) = self.strip.get(index) else {
            return false;
        };
        self.primary = load_primary(thumbnails, &entry.path, self.image_size);
        true
    }

    /// The text body.
    ///
    /// ```text
    /// Event: <title>
    /// Date: <date>
    ///
    /// Characters:
    /// <name>
    ///   <description>
    ///
    /// Activity: <activity>
    ///
    /// Location: <location>
    ///   <description>
    /// ```
    ///
    /// The activity paragraph is left out when empty, as are empty
    /// descriptions. An event without characters lists `(none)`.
    #[must_use]
    pub fn body_text(&self) -> String {
        let mut text = format!("Event: {}\nDate: {}\n\nCharacters:\n", self.title, self.date);
        if self.characters.is_empty() {
            text.push_str("(none)\n");
        } else {
            let entries: Vec<String> = self.characters.iter().map(entry_text).collect();
            text.push_str(&entries.join("\n\n"));
            text.push('\n');
        }
        if !self.activity.trim().is_empty() {
            text.push_str(&format!("\nActivity: {}\n", self.activity));
        }
        text.push_str("\nLocation: ");
        text.push_str(&entry_text(&self.location));
        text
    }
}

fn entry_text(entry: &DetailEntry) -> String {
    if entry.description.trim().is_empty() {
        entry.name.clone()
    } else {
        format!("{}\n  {}", entry.name, entry.description)
    }
}

fn load_primary<D: ThumbnailDecoder>(
    thumbnails: &mut ThumbnailCache<D>,
    path: &str,
    size: ThumbnailSize,
) -> PrimaryImage {
    match thumbnails.get_sized(path, size) {
        Some(thumbnail) => PrimaryImage::Loaded {
            path: path.to_owned(),
            thumbnail,
        },
        None => PrimaryImage::Failed {
            path: path.to_owned(),
        },
    }
}
