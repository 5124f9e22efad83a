// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storyline_timeline --heading-base-level=0

//! Storyline Timeline: the interactive timeline controller.
//!
//! [`TimelineView`] turns pointer and wheel input into pan, zoom, marker
//! drags, hover previews, the detail view and legend highlighting, and
//! rebuilds a [`TimelineFrame`](storyline_layout::TimelineFrame) from a
//! [`TimelineStore`] whenever anything changes. It is headless: the host owns
//! the window, forwards input in view coordinates, and paints the frame.
//!
//! ## Gestures
//!
//! At most one gesture is active at a time, tracked by [`Gesture`]:
//!
//! - **Zoom**: the wheel multiplies the zoom by 1.1 or 0.9, clamped to
//!   `[0.6, 3.0]` by default. Allowed at any time.
//! - **Pan**: a secondary or middle press starts panning; motion moves the
//!   axis horizontally until that button is released.
//! - **Drag**: a primary press on a marker grabs the event. Motion only moves
//!   a guide line; on release the event is moved to the nearest axis date
//!   through [`TimelineStore::reassign_date`]. Releasing outside the view
//!   leaves it alone.
//!
//! Hover previews follow the pointer over markers while no gesture is
//! active. Double-clicking a marker opens a [`DetailView`]; double-clicking
//! empty canvas clears the legend highlight. A primary click on a legend
//! character toggles it in the highlight.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use storyline_date::DateParser;
//! use storyline_layout::Event;
//! use storyline_thumbnail::ThumbnailCache;
//! use storyline_timeline::{
//!     MemoryStore, PointerButton, TimelineConfig, TimelineView,
//! };
//!
//! let mut store = MemoryStore::new();
//! let party = store.push_event(Event::new("Party", "1/6/2024"));
//! store.push_event(Event::new("Trip", "5/6/2024"));
//!
//! let mut view = TimelineView::with_parts(
//!     TimelineConfig::default(),
//!     DateParser::new(2024),
//!     ThumbnailCache::new(),
//! );
//! view.resize(Size::new(800.0, 400.0), &store);
//! view.set_visible(true, &store);
//!
//! // Two dates: 1/6 at the left margin, 5/6 at the right margin.
//! let frame = view.frame().unwrap();
//! assert_eq!(frame.markers[0].center(), Point::new(80.0, 200.0));
//!
//! // Drag the party onto the trip's date.
//! view.on_pointer_down(Point::new(80.0, 200.0), PointerButton::Primary, &store);
//! view.on_pointer_move(Point::new(700.0, 200.0), &store);
//! view.on_pointer_up(Point::new(700.0, 200.0), PointerButton::Primary, &mut store);
//! assert_eq!(store.event(party).unwrap().date, "5/6/2024");
//! ```
//!
//! Libraries in this workspace log through the [`log`] facade and never
//! install a logger.

mod config;
mod detail;
mod drag;
mod gesture;
mod hover;
mod store;
mod view;

pub use config::TimelineConfig;
pub use detail::{DetailEntry, DetailView, PrimaryImage, StripImage, StripKind};
pub use drag::DragState;
pub use gesture::{Gesture, PointerButton};
pub use hover::HoverPreview;
pub use store::{EventId, MemoryStore, StoreError, TimelineStore};
pub use view::{TimelineView, TimelineViewDebugInfo};
