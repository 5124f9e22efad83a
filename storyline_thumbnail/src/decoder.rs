// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoding backends for [`ThumbnailCache`](crate::ThumbnailCache).

use core::fmt;
use std::io;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::bitmap::{Bitmap, ThumbnailSize};

/// Error produced when a file cannot be turned into a thumbnail.
///
/// The cache never hands these to its callers; they are logged and the entry
/// is remembered as absent.
#[derive(Debug)]
pub enum DecodeError {
    /// The file could not be read.
    Io(io::Error),
    /// The file was read but is not a decodable image.
    Image(image::ImageError),
    /// The image decoded to zero pixels.
    Empty {
        /// Path of the offending file.
        path: PathBuf,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not read image: {err}"),
            Self::Image(err) => write!(f, "could not decode image: {err}"),
            Self::Empty { path } => write!(f, "image `{}` has no pixels", path.display()),
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::Empty { .. } => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for DecodeError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err)
    }
}

/// Turns an image file into a bitmap that fits a box.
///
/// Implemented for [`ImageDecoder`] and for any
/// `FnMut(&Path, ThumbnailSize) -> Result<Bitmap, DecodeError>`, which is
/// handy for tests and for hosts with their own decoding pipeline.
pub trait ThumbnailDecoder {
    /// Decodes `path`, shrinking the result to fit inside `size`.
    fn decode(&mut self, path: &Path, size: ThumbnailSize) -> Result<Bitmap, DecodeError>;
}

impl<F> ThumbnailDecoder for F
where
    F: FnMut(&Path, ThumbnailSize) -> Result<Bitmap, DecodeError>,
{
    fn decode(&mut self, path: &Path, size: ThumbnailSize) -> Result<Bitmap, DecodeError> {
        self(path, size)
    }
}

/// Decoder backed by the `image` crate.
///
/// Supports whatever formats the `image` crate was built with (PNG, JPEG,
/// GIF, WebP and BMP with default features). Images larger than the box are
/// shrunk preserving aspect ratio; smaller images are kept at their size.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImageDecoder;

impl ThumbnailDecoder for ImageDecoder {
    fn decode(&mut self, path: &Path, size: ThumbnailSize) -> Result<Bitmap, DecodeError> {
        let image = image::open(path)?;
        let image = fit_inside(image, size);
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::Empty {
                path: path.to_path_buf(),
            });
        }
        Bitmap::from_rgba8(width, height, rgba.into_raw()).ok_or_else(|| DecodeError::Empty {
            path: path.to_path_buf(),
        })
    }
}

fn fit_inside(image: DynamicImage, size: ThumbnailSize) -> DynamicImage {
    if image.width() <= size.width && image.height() <= size.height {
        image
    } else {
        image.thumbnail(size.width, size.height)
    }
}
