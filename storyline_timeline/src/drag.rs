// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer tracking for an active gesture.
//!
//! A [`DragState`] lives inside a gesture variant, so it only exists while a
//! button is held: there is no "not dragging" state to check.
//!
//! ```
//! use kurbo::Point;
//! use storyline_timeline::DragState;
//!
//! let mut drag = DragState::new(Point::new(10.0, 20.0));
//!
//! // Each update reports the movement since the previous one.
//! let delta = drag.update(Point::new(15.0, 25.0));
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! let delta = drag.update(Point::new(12.0, 25.0));
//! assert_eq!((delta.x, delta.y), (-3.0, 0.0));
//!
//! // The total offset is measured from the press position.
//! assert_eq!(drag.total_offset().x, 2.0);
//! ```

use kurbo::{Point, Vec2};

/// Press position and latest position of a held pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState {
    start: Point,
    last: Point,
}

impl DragState {
    /// Starts tracking at the press position.
    #[must_use]
    pub const fn new(pos: Point) -> Self {
        Self {
            start: pos,
            last: pos,
        }
    }

    /// Records a new position and returns the movement since the last one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    /// Where the button went down.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The most recent position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.last
    }

    /// Offset of the most recent position from the press position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;

    #[test]
    fn new_state_has_no_offset() {
        let drag = DragState::new(Point::new(3.0, 4.0));
        assert_eq!(drag.start(), drag.position());
        assert_eq!(drag.total_offset(), Vec2::ZERO);
    }

    #[test]
    fn updates_report_incremental_deltas() {
        let mut drag = DragState::new(Point::new(0.0, 0.0));
        assert_eq!(drag.update(Point::new(10.0, 0.0)), Vec2::new(10.0, 0.0));
        assert_eq!(drag.update(Point::new(10.0, 0.0)), Vec2::ZERO);
        assert_eq!(drag.update(Point::new(4.0, 2.0)), Vec2::new(-6.0, 2.0));
        assert_eq!(drag.position(), Point::new(4.0, 2.0));
        assert_eq!(drag.total_offset(), Vec2::new(4.0, 2.0));
    }
}
