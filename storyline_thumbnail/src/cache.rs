// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;

use crate::bitmap::{Thumbnail, ThumbnailSize};
use crate::decoder::{ImageDecoder, ThumbnailDecoder};

/// Cache key: canonical absolute path plus the requested box.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailKey {
    /// Canonical path, or the absolute form of the requested path when it
    /// could not be canonicalized.
    pub path: PathBuf,
    /// Requested bounding box.
    pub size: ThumbnailSize,
}

/// Counters describing how a [`ThumbnailCache`] has been used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from an existing entry (present or absent).
    pub hits: u64,
    /// Lookups that created a new entry.
    pub misses: u64,
    /// New entries recorded as absent because the file was missing or did
    /// not decode.
    pub failures: u64,
}

/// Memoizing thumbnail loader.
///
/// Every distinct `(canonical path, box size)` pair is decoded at most once.
/// Failures are remembered as well: a missing or broken file answers `None`
/// on every later request without touching the decoder again, so callers
/// should treat `None` as "move on to the next fallback", not "retry".
///
/// Entries are never evicted. The cache grows with the number of distinct
/// image references in the project and the handful of box sizes the view
/// uses, not with the number of events.
#[derive(Debug)]
pub struct ThumbnailCache<D = ImageDecoder> {
    decoder: D,
    entries: HashMap<ThumbnailKey, Option<Thumbnail>>,
    stats: CacheStats,
}

impl Default for ThumbnailCache<ImageDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl ThumbnailCache<ImageDecoder> {
    /// Creates an empty cache decoding with the `image` crate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_decoder(ImageDecoder)
    }
}

impl<D> ThumbnailCache<D> {
    /// Creates an empty cache using `decoder` for misses.
    #[must_use]
    pub fn with_decoder(decoder: D) -> Self {
        Self {
            decoder,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Returns the number of entries, including remembered failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been requested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the usage counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Returns the decoder.
    #[must_use]
    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// Returns `true` if an entry (present or absent) exists for the key.
    #[must_use]
    pub fn contains_key(&self, key: &ThumbnailKey) -> bool {
        self.entries.contains_key(key)
    }
}

impl<D: ThumbnailDecoder> ThumbnailCache<D> {
    /// Returns the thumbnail for `path` fitted into `max_width` × `max_height`.
    ///
    /// Surrounding whitespace in `path` is ignored; a blank path answers
    /// `None` without creating an entry.
    pub fn get(&mut self, path: &str, max_width: u32, max_height: u32) -> Option<Thumbnail> {
        self.get_sized(path, ThumbnailSize::new(max_width, max_height))
    }

    /// Same as [`ThumbnailCache::get`] with a prebuilt [`ThumbnailSize`].
    pub fn get_sized(&mut self, path: &str, size: ThumbnailSize) -> Option<Thumbnail> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let (key, resolved) = resolve_key(Path::new(path), size);

        if let Some(entry) = self.entries.get(&key) {
            self.stats.hits += 1;
            log::trace!("thumbnail cache hit for {}", key.path.display());
            return entry.clone();
        }

        self.stats.misses += 1;
        let entry = if resolved {
            match self.decoder.decode(&key.path, size) {
                Ok(bitmap) => Some(Thumbnail::new(bitmap)),
                Err(err) => {
                    log::debug!("thumbnail for {} unavailable: {err}", key.path.display());
                    None
                }
            }
        } else {
            log::debug!("thumbnail source {} does not exist", key.path.display());
            None
        };
        if entry.is_none() {
            self.stats.failures += 1;
        }
        self.entries.insert(key, entry.clone());
        entry
    }
}

/// Returns the cache key for `path` and whether the path exists.
fn resolve_key(path: &Path, size: ThumbnailSize) -> (ThumbnailKey, bool) {
    match fs::canonicalize(path) {
        Ok(path) => (ThumbnailKey { path, size }, true),
        Err(_) => {
            let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            (ThumbnailKey { path, size }, false)
        }
    }
}
