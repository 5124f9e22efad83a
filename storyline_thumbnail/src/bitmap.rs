// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use std::sync::Arc;

/// Requested bounding box for a thumbnail, in pixels.
///
/// Decoded images are shrunk to fit inside the box, preserving aspect ratio.
/// Both dimensions are at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbnailSize {
    /// Maximum width.
    pub width: u32,
    /// Maximum height.
    pub height: u32,
}

impl ThumbnailSize {
    /// Creates a box size, raising zero dimensions to 1.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width: if width == 0 { 1 } else { width },
            height: if height == 0 { 1 } else { height },
        }
    }

    /// Creates a square box.
    #[must_use]
    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }
}

/// A decoded image in straight-alpha RGBA8, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

impl Bitmap {
    /// Wraps RGBA8 pixel data.
    ///
    /// Returns `None` if `pixels` does not hold exactly `width * height * 4`
    /// bytes.
    #[must_use]
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA8 bytes.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Shared handle to a cached [`Bitmap`].
///
/// Cloning is cheap. Two handles obtained from the same cache entry compare
/// [`Thumbnail::ptr_eq`].
#[derive(Clone, Debug)]
pub struct Thumbnail(Arc<Bitmap>);

impl Thumbnail {
    /// Wraps a bitmap in a new handle.
    #[must_use]
    pub fn new(bitmap: Bitmap) -> Self {
        Self(Arc::new(bitmap))
    }

    /// Returns `true` if both handles point at the same cached bitmap.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the bitmap behind the handle.
    #[must_use]
    pub fn bitmap(&self) -> &Bitmap {
        &self.0
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.0.height
    }
}

#[cfg(test)]
mod tests {
    use super::{Bitmap, Thumbnail, ThumbnailSize};

    #[test]
    fn size_never_has_zero_dimensions() {
        assert_eq!(ThumbnailSize::new(0, 0), ThumbnailSize::new(1, 1));
        assert_eq!(ThumbnailSize::square(40), ThumbnailSize::new(40, 40));
    }

    #[test]
    fn bitmap_checks_buffer_length() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_some());
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_none());
        assert!(Bitmap::from_rgba8(0, 0, Vec::new()).is_some());
    }

    #[test]
    fn clones_share_the_bitmap() {
        let thumb = Thumbnail::new(Bitmap::from_rgba8(1, 1, vec![1, 2, 3, 4]).unwrap());
        let other = Thumbnail::new(thumb.bitmap().clone());
        assert!(thumb.ptr_eq(&thumb.clone()));
        assert!(!thumb.ptr_eq(&other));
        assert_eq!(thumb.bitmap().pixels(), &[1, 2, 3, 4]);
    }
}
