// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.6;
/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

/// Pan and zoom state of the timeline view.
///
/// The pan offset is a horizontal displacement in view/device units
/// (pixels) applied to every axis position. The zoom factor scales marker
/// geometry and is always kept inside `[min_zoom, max_zoom]`.
///
/// Unlike a general world/view camera, the axis spreads its dates across the
/// view width regardless of zoom, so zoom here affects marker size and
/// stacking only.
#[derive(Clone, Debug)]
pub struct AxisViewport {
    zoom: f64,
    pan: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for AxisViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisViewport {
    /// Creates a viewport with zoom `1.0`, no pan, and zoom limits
    /// `[0.6, 3.0]`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: 0.0,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in view units.
    #[must_use]
    pub fn pan(&self) -> f64 {
        self.pan
    }

    /// Returns the configured `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Multiplies the zoom factor by `factor`, clamping the result.
    ///
    /// Returns `true` if the zoom actually changed. Non-positive factors are
    /// ignored.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() {
            return false;
        }
        let old_zoom = self.zoom;
        self.set_zoom(old_zoom * factor);
        (self.zoom - old_zoom).abs() >= f64::EPSILON
    }

    /// Pans the view by a delta in view/device space.
    pub fn pan_by_view(&mut self, delta: f64) {
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        self.pan += delta;
    }

    /// Resets the pan offset to zero.
    pub fn reset_pan(&mut self) {
        self.pan = 0.0;
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> AxisViewportDebugInfo {
        AxisViewportDebugInfo {
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

/// Debug snapshot of an [`AxisViewport`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisViewportDebugInfo {
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset in view coordinates.
    pub pan: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use super::{AxisViewport, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};

    #[test]
    fn repeated_zoom_in_never_exceeds_max() {
        let mut vp = AxisViewport::new();
        for _ in 0..200 {
            vp.zoom_by(1.1);
            assert!(vp.zoom() <= DEFAULT_MAX_ZOOM);
        }
        assert!((vp.zoom() - DEFAULT_MAX_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn repeated_zoom_out_never_goes_below_min() {
        let mut vp = AxisViewport::new();
        for _ in 0..200 {
            vp.zoom_by(0.9);
            assert!(vp.zoom() >= DEFAULT_MIN_ZOOM);
        }
        assert!((vp.zoom() - DEFAULT_MIN_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn zoom_by_reports_change_only_when_not_pinned() {
        let mut vp = AxisViewport::new();
        vp.set_zoom(DEFAULT_MAX_ZOOM);
        assert!(!vp.zoom_by(1.1));
        assert!(vp.zoom_by(0.9));
        assert!(!vp.zoom_by(0.0));
        assert!(!vp.zoom_by(-2.0));
    }

    #[test]
    fn zoom_limits_are_normalized_and_reclamp() {
        let mut vp = AxisViewport::new();
        vp.set_zoom(2.5);
        vp.set_zoom_limits(2.0, 0.5);
        assert_eq!(vp.zoom_limits(), (0.5, 2.0));
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn pan_accumulates_and_ignores_non_finite() {
        let mut vp = AxisViewport::new();
        vp.pan_by_view(10.0);
        vp.pan_by_view(-4.0);
        vp.pan_by_view(f64::NAN);
        assert_eq!(vp.pan(), 6.0);

        vp.reset_pan();
        let info = vp.debug_info();
        assert_eq!(info.pan, 0.0);
        assert_eq!(info.zoom, 1.0);
    }
}
