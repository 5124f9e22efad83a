// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Size};
use storyline_axis::{AxisViewport, DateAxis};
use storyline_date::DateParser;
use storyline_layout::{
    DatedEvent, HighlightSet, LayoutEngine, LayoutRequest, Roster, TimelineFrame,
};
use storyline_thumbnail::{ImageDecoder, ThumbnailCache, ThumbnailDecoder};

use crate::config::TimelineConfig;
use crate::detail::DetailView;
use crate::drag::DragState;
use crate::gesture::{Gesture, PointerButton};
use crate::hover::HoverPreview;
use crate::store::{EventId, TimelineStore};

/// Snapshot of a [`TimelineView`] for debugging and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineViewDebugInfo {
    /// View size.
    pub size: Size,
    /// Whether the view is shown.
    pub visible: bool,
    /// Zoom factor.
    pub zoom: f64,
    /// Pan offset.
    pub pan: f64,
    /// Active gesture.
    pub gesture: Gesture,
    /// Number of distinct dates on the axis.
    pub axis_dates: usize,
    /// Number of markers in the last frame.
    pub markers: usize,
    /// Number of highlighted characters.
    pub highlighted: usize,
    /// Whether a hover preview is shown.
    pub hovering: bool,
    /// Whether the detail view is open.
    pub detail_open: bool,
}

/// Interactive timeline over a [`TimelineStore`].
///
/// The view owns all interaction state: pan and zoom, the active gesture,
/// the legend highlight, the color memos and the thumbnail cache. It holds no
/// records; every handler that may need to relayout takes the store and
/// rebuilds the frame from scratch.
///
/// Handlers return `true` when something visible changed (the frame, the
/// hover preview, the drag guide or the detail view) and the host should
/// repaint.
#[derive(Debug)]
pub struct TimelineView<D = ImageDecoder> {
    config: TimelineConfig,
    parser: DateParser,
    size: Size,
    visible: bool,
    viewport: AxisViewport,
    axis: DateAxis,
    engine: LayoutEngine,
    highlight: HighlightSet,
    thumbnails: ThumbnailCache<D>,
    gesture: Gesture,
    hover: Option<HoverPreview>,
    detail: Option<DetailView>,
    frame: Option<TimelineFrame>,
    event_ids: Vec<EventId>,
}

impl Default for TimelineView<ImageDecoder> {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl TimelineView<ImageDecoder> {
    /// Creates a hidden, zero-sized view that reads the current year from the
    /// local clock and decodes images with the `image` crate.
    #[must_use]
    pub fn new(config: TimelineConfig) -> Self {
        Self::with_parts(config, DateParser::from_local_clock(), ThumbnailCache::new())
    }
}

impl<D: ThumbnailDecoder> TimelineView<D> {
    /// Creates a hidden, zero-sized view with an explicit parser and cache.
    #[must_use]
    pub fn with_parts(
        config: TimelineConfig,
        parser: DateParser,
        thumbnails: ThumbnailCache<D>,
    ) -> Self {
        let mut viewport = AxisViewport::new();
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        Self {
            engine: LayoutEngine::new(config.layout),
            config,
            parser,
            size: Size::ZERO,
            visible: false,
            viewport,
            axis: DateAxis::empty(),
            highlight: HighlightSet::new(),
            thumbnails,
            gesture: Gesture::Idle,
            hover: None,
            detail: None,
            frame: None,
            event_ids: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Returns the date parser.
    #[must_use]
    pub fn parser(&self) -> &DateParser {
        &self.parser
    }

    /// Returns the view size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns `true` if the view is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns the pan and zoom state.
    #[must_use]
    pub fn viewport(&self) -> &AxisViewport {
        &self.viewport
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Returns the current pan offset.
    #[must_use]
    pub fn pan(&self) -> f64 {
        self.viewport.pan()
    }

    /// Returns the axis built by the last redraw.
    #[must_use]
    pub fn axis(&self) -> &DateAxis {
        &self.axis
    }

    /// Returns the last frame, if any redraw has happened.
    #[must_use]
    pub fn frame(&self) -> Option<&TimelineFrame> {
        self.frame.as_ref()
    }

    /// Returns the active gesture.
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Returns the hover preview, if one is shown.
    #[must_use]
    pub fn hover(&self) -> Option<&HoverPreview> {
        self.hover.as_ref()
    }

    /// Returns the detail view, if open.
    #[must_use]
    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Returns the legend highlight.
    #[must_use]
    pub fn highlight(&self) -> &HighlightSet {
        &self.highlight
    }

    /// Returns the layout engine and its color memos.
    #[must_use]
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Mutable layout engine, for seeding or resetting colors.
    pub fn engine_mut(&mut self) -> &mut LayoutEngine {
        &mut self.engine
    }

    /// Returns the thumbnail cache.
    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache<D> {
        &self.thumbnails
    }

    /// Store identity of the event at `filtered_index` in the last frame.
    #[must_use]
    pub fn event_id(&self, filtered_index: usize) -> Option<EventId> {
        self.event_ids.get(filtered_index).copied()
    }

    /// Vertical guide line following the cursor while a marker is dragged.
    #[must_use]
    pub fn drag_guide(&self) -> Option<Line> {
        match &self.gesture {
            Gesture::DraggingEvent { drag, .. } => {
                let pos = drag.position();
                let half = self.config.guide_half_height;
                Some(Line::new((pos.x, pos.y - half), (pos.x, pos.y + half)))
            }
            _ => None,
        }
    }

    /// Returns a snapshot of the view state.
    #[must_use]
    pub fn debug_info(&self) -> TimelineViewDebugInfo {
        TimelineViewDebugInfo {
            size: self.size,
            visible: self.visible,
            zoom: self.viewport.zoom(),
            pan: self.viewport.pan(),
            gesture: self.gesture,
            axis_dates: self.axis.len(),
            markers: self.frame.as_ref().map_or(0, |f| f.markers.len()),
            highlighted: self.highlight.len(),
            hovering: self.hover.is_some(),
            detail_open: self.detail.is_some(),
        }
    }

    /// Recomputes the axis and the frame from the store.
    ///
    /// Returns `None` without doing anything while the view is hidden or has
    /// no area.
    pub fn redraw<S: TimelineStore>(&mut self, store: &S) -> Option<&TimelineFrame> {
        if !self.visible || self.size.width <= 0.0 || self.size.height <= 0.0 {
            return None;
        }
        let filtered = store.filtered_events();
        let dated: Vec<DatedEvent<'_>> = filtered
            .iter()
            .enumerate()
            .map(|(filtered_index, (_, event))| DatedEvent {
                filtered_index,
                event,
                date: self.parser.parse(&event.date),
            })
            .collect();
        self.event_ids = filtered.iter().map(|(id, _)| *id).collect();
        self.axis = DateAxis::build(
            dated.iter().map(|d| d.date),
            self.size.width,
            self.viewport.pan(),
            &self.config.axis,
        );
        let request = LayoutRequest {
            events: &dated,
            axis: &self.axis,
            size: self.size,
            zoom: self.viewport.zoom(),
            roster: Roster::new(store.characters(), store.locations()),
            highlight: &self.highlight,
        };
        let frame = self.engine.layout(&request, &mut self.thumbnails);
        log::debug!(
            "timeline redraw: {} filtered events, {} axis dates, {} markers",
            dated.len(),
            self.axis.len(),
            frame.markers.len()
        );
        self.frame = Some(frame);
        self.frame.as_ref()
    }

    /// Changes the view size and redraws.
    pub fn resize<S: TimelineStore>(&mut self, size: Size, store: &S) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        self.redraw(store).is_some()
    }

    /// Shows or hides the view.
    ///
    /// Hiding drops the hover preview and cancels any gesture; showing
    /// redraws.
    pub fn set_visible<S: TimelineStore>(&mut self, visible: bool, store: &S) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        if visible {
            self.redraw(store);
        } else {
            self.hover = None;
            self.gesture = Gesture::Idle;
        }
        true
    }

    /// Wheel input: positive `delta` zooms in, negative zooms out.
    ///
    /// Works in any gesture state.
    pub fn on_wheel<S: TimelineStore>(&mut self, delta: f64, store: &S) -> bool {
        let factor = if delta > 0.0 {
            self.config.zoom_in_factor
        } else if delta < 0.0 {
            self.config.zoom_out_factor
        } else {
            return false;
        };
        if !self.viewport.zoom_by(factor) {
            return false;
        }
        self.redraw(store);
        true
    }

    /// Button press.
    ///
    /// Secondary and middle buttons start panning. The primary button toggles
    /// a legend character or grabs a marker. Presses while another gesture is
    /// active are ignored.
    pub fn on_pointer_down<S: TimelineStore>(
        &mut self,
        pos: Point,
        button: PointerButton,
        store: &S,
    ) -> bool {
        if !self.gesture.is_idle() {
            return false;
        }
        if button.pans() {
            log::debug!("pan started at x={}", pos.x);
            self.gesture = Gesture::Panning {
                button,
                drag: DragState::new(pos),
            };
            self.hover = None;
            return true;
        }

        let Some(frame) = &self.frame else {
            return false;
        };
        if let Some(name) = frame.legend_character_at(pos) {
            let name = name.to_owned();
            return self.toggle_highlight(&name, store);
        }
        let Some(marker) = frame.marker_at(pos) else {
            return false;
        };
        let filtered_index = marker.filtered_index;
        let Some(event) = self.event_id(filtered_index) else {
            return false;
        };
        log::debug!("drag started for event {event} at filtered index {filtered_index}");
        self.gesture = Gesture::DraggingEvent {
            event,
            filtered_index,
            drag: DragState::new(pos),
        };
        self.hover = None;
        true
    }

    /// Pointer motion.
    ///
    /// Pans or moves the drag guide while a gesture is active; otherwise
    /// tracks which marker is under the pointer for the hover preview.
    pub fn on_pointer_move<S: TimelineStore>(&mut self, pos: Point, store: &S) -> bool {
        match &mut self.gesture {
            Gesture::Panning { drag, .. } => {
                let delta = drag.update(pos);
                if delta.x == 0.0 {
                    return false;
                }
                self.viewport.pan_by_view(delta.x);
                self.redraw(store);
                true
            }
            Gesture::DraggingEvent { drag, .. } => {
                drag.update(pos);
                true
            }
            Gesture::Idle => self.update_hover(pos, store),
        }
    }

    /// Button release.
    ///
    /// Ends a pan when the panning button is released. Ends a marker drag on
    /// primary release: if the release position resolves to an axis date,
    /// the store is asked to move the event there, written in canonical
    /// `D/M/YYYY` form.
    pub fn on_pointer_up<S: TimelineStore>(
        &mut self,
        pos: Point,
        button: PointerButton,
        store: &mut S,
    ) -> bool {
        match self.gesture {
            Gesture::Panning { button: held, .. } if held == button => {
                log::debug!("pan ended, offset {}", self.viewport.pan());
                self.gesture = Gesture::Idle;
                true
            }
            Gesture::DraggingEvent { event, .. } if button == PointerButton::Primary => {
                self.gesture = Gesture::Idle;
                let target = if (0.0..=self.size.width).contains(&pos.x) {
                    self.axis.x_to_date(pos.x)
                } else {
                    None
                };
                match target {
                    Some(date) => {
                        let text = date.canonical();
                        log::debug!("drag ended: moving event {event} to {text}");
                        if let Err(err) = store.reassign_date(event, &text) {
                            log::warn!("could not move event {event} to {text}: {err}");
                        }
                    }
                    None => log::debug!("drag ended off the axis; event {event} unchanged"),
                }
                self.redraw(store);
                true
            }
            _ => false,
        }
    }

    /// Double click.
    ///
    /// On a marker, opens the detail view. On empty canvas, clears the legend
    /// highlight.
    pub fn on_double_click<S: TimelineStore>(&mut self, pos: Point, store: &S) -> bool {
        let Some(frame) = &self.frame else {
            return false;
        };
        if let Some(marker) = frame.marker_at(pos) {
            let filtered_index = marker.filtered_index;
            return self.open_detail(filtered_index, store);
        }
        if frame.legend_character_at(pos).is_some() {
            return false;
        }
        self.clear_highlight(store)
    }

    /// The pointer left the view: drops the hover preview.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.hover.take().is_some()
    }

    /// Opens the detail view for the event at `filtered_index`.
    pub fn open_detail<S: TimelineStore>(&mut self, filtered_index: usize, store: &S) -> bool {
        let filtered = store.filtered_events();
        let Some((id, event)) = filtered.get(filtered_index) else {
            return false;
        };
        self.hover = None;
        self.detail = Some(DetailView::open(
            *id,
            event,
            Roster::new(store.characters(), store.locations()),
            &mut self.thumbnails,
            self.config.detail_image,
            self.config.strip_thumbnail,
        ));
        true
    }

    /// Shows strip entry `index` as the detail view's primary image.
    pub fn select_detail_thumbnail(&mut self, index: usize) -> bool {
        match &mut self.detail {
            Some(detail) => detail.select_thumbnail(index, &mut self.thumbnails),
            None => false,
        }
    }

    /// Closes the detail view.
    pub fn close_detail(&mut self) -> bool {
        self.detail.take().is_some()
    }

    /// Toggles a character in the legend highlight and redraws.
    pub fn toggle_highlight<S: TimelineStore>(&mut self, name: &str, store: &S) -> bool {
        let on = self.highlight.toggle(name);
        log::debug!("highlight {name}: {on}");
        self.redraw(store);
        true
    }

    /// Clears the legend highlight, redrawing only if it was non-empty.
    pub fn clear_highlight<S: TimelineStore>(&mut self, store: &S) -> bool {
        if !self.highlight.clear() {
            return false;
        }
        self.redraw(store);
        true
    }

    fn update_hover<S: TimelineStore>(&mut self, pos: Point, store: &S) -> bool {
        let under = self
            .frame
            .as_ref()
            .and_then(|frame| frame.marker_at(pos))
            .map(|marker| marker.filtered_index);
        let origin = pos + self.config.hover_offset;

        let Some(index) = under else {
            return self.hover.take().is_some();
        };
        if let Some(hover) = &mut self.hover
            && hover.filtered_index == index
        {
            hover.origin = origin;
            return true;
        }

        let filtered = store.filtered_events();
        self.hover = filtered.get(index).map(|(id, event)| {
            HoverPreview::new(
                *id,
                index,
                event,
                Roster::new(store.characters(), store.locations()),
                &mut self.thumbnails,
                self.config.hover_thumbnail,
                origin,
            )
        });
        true
    }
}
