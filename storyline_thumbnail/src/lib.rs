// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storyline_thumbnail --heading-base-level=0

//! Storyline Thumbnail: keyed image-decode memoization.
//!
//! Timeline markers, the legend, hover previews and the detail view all show
//! small versions of the same handful of image files. [`ThumbnailCache`]
//! decodes each `(canonical path, box size)` pair once and hands out cheap
//! shared [`Thumbnail`] handles afterwards.
//!
//! The lookup contract is deliberately forgiving:
//! - A blank path, a missing file, or a file that fails to decode all answer
//!   `None`. Nothing is ever raised to the caller.
//! - Failures are cached too, so a broken reference costs one attempt per
//!   session, not one per redraw.
//! - Nothing is evicted.
//!
//! Decoding is pluggable through [`ThumbnailDecoder`]; [`ImageDecoder`] uses
//! the `image` crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use storyline_thumbnail::ThumbnailCache;
//!
//! let mut cache = ThumbnailCache::new();
//!
//! // Missing files answer `None`, and keep answering `None` from the cache.
//! assert!(cache.get("no/such/portrait.png", 40, 40).is_none());
//! assert!(cache.get("no/such/portrait.png", 40, 40).is_none());
//! assert_eq!(cache.stats().misses, 1);
//! assert_eq!(cache.stats().hits, 1);
//! ```
//!
//! The cache is single-threaded (`&mut self` lookups); handles are `Arc`
//! based and may be sent elsewhere once obtained.

mod bitmap;
mod cache;
pub mod decoder;

pub use bitmap::{Bitmap, Thumbnail, ThumbnailSize};
pub use cache::{CacheStats, ThumbnailCache, ThumbnailKey};
pub use decoder::{DecodeError, ImageDecoder, ThumbnailDecoder};
