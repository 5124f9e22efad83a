// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `storyline_thumbnail` crate.
//!
//! Real PNG files are written into a scratch directory; a counting decoder is
//! used where the number of decode attempts matters.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::{Rgba, RgbaImage};
use storyline_thumbnail::{Bitmap, DecodeError, ThumbnailCache, ThumbnailSize};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]))
        .save(&path)
        .unwrap();
    path
}

fn counting_decoder(
    calls: Rc<Cell<usize>>,
) -> impl FnMut(&Path, ThumbnailSize) -> Result<Bitmap, DecodeError> {
    move |_path: &Path, _size: ThumbnailSize| {
        calls.set(calls.get() + 1);
        Ok(Bitmap::from_rgba8(1, 1, vec![0, 0, 0, 255]).unwrap())
    }
}

#[test]
fn same_path_and_size_returns_the_same_handle() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "hero.png", 64, 64);
    let path = path.to_str().unwrap();

    let mut cache = ThumbnailCache::new();
    let first = cache.get(path, 40, 40).unwrap();
    let second = cache.get(path, 40, 40).unwrap();
    assert!(first.ptr_eq(&second));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().hits, 1);
    assert_eq!(cache.stats().misses, 1);
}

#[test]
fn different_box_sizes_are_separate_entries() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "castle.png", 200, 100);
    let path = path.to_str().unwrap();

    let mut cache = ThumbnailCache::new();
    let small = cache.get(path, 40, 40).unwrap();
    let large = cache.get(path, 100, 100).unwrap();
    assert!(!small.ptr_eq(&large));
    assert_eq!(cache.len(), 2);

    // Aspect ratio is preserved when shrinking.
    assert_eq!((small.width(), small.height()), (40, 20));
    assert_eq!((large.width(), large.height()), (100, 50));
}

#[test]
fn small_images_are_not_upscaled() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "icon.png", 10, 12);

    let mut cache = ThumbnailCache::new();
    let thumb = cache.get(path.to_str().unwrap(), 520, 520).unwrap();
    assert_eq!((thumb.width(), thumb.height()), (10, 12));
    assert_eq!(thumb.bitmap().pixels().len(), 10 * 12 * 4);
}

#[test]
fn nonexistent_path_returns_none_twice_without_decoding() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("ghost.png");
    let missing = missing.to_str().unwrap();

    let calls = Rc::new(Cell::new(0));
    let mut cache = ThumbnailCache::with_decoder(counting_decoder(calls.clone()));
    assert!(cache.get(missing, 40, 40).is_none());
    assert!(cache.get(missing, 40, 40).is_none());
    assert_eq!(calls.get(), 0);
    assert_eq!(cache.stats().failures, 1);
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn undecodable_file_is_remembered_as_absent() {
    let dir = TempDir::new().unwrap();
    let bogus = dir.path().join("notes.png");
    std::fs::write(&bogus, b"this is not a png").unwrap();
    let bogus = bogus.to_str().unwrap();

    let mut cache = ThumbnailCache::new();
    assert!(cache.get(bogus, 40, 40).is_none());
    assert!(cache.get(bogus, 40, 40).is_none());
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().misses, 1);
    assert_eq!(cache.stats().failures, 1);
}

#[test]
fn decoder_runs_once_per_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("anything.bin");
    std::fs::write(&path, b"bytes").unwrap();
    let path = path.to_str().unwrap();

    let calls = Rc::new(Cell::new(0));
    let mut cache = ThumbnailCache::with_decoder(counting_decoder(calls.clone()));
    for _ in 0..5 {
        assert!(cache.get(path, 22, 22).is_some());
    }
    assert_eq!(calls.get(), 1);
    assert!(cache.get(path, 80, 80).is_some());
    assert_eq!(calls.get(), 2);
}

#[test]
fn equivalent_spellings_of_a_path_share_an_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_png(dir.path(), "map.png", 8, 8);
    let direct = path.to_str().unwrap().to_owned();
    let roundabout = dir
        .path()
        .join(".")
        .join("map.png")
        .to_str()
        .unwrap()
        .to_owned();

    let mut cache = ThumbnailCache::new();
    let a = cache.get(&direct, 40, 40).unwrap();
    let b = cache.get(&format!("  {roundabout}  "), 40, 40).unwrap();
    assert!(a.ptr_eq(&b));
    assert_eq!(cache.len(), 1);
}

#[test]
fn blank_paths_do_not_create_entries() {
    let mut cache = ThumbnailCache::new();
    assert!(cache.get("", 40, 40).is_none());
    assert!(cache.get("   ", 40, 40).is_none());
    assert!(cache.is_empty());
    assert_eq!(cache.stats().misses, 0);
}
