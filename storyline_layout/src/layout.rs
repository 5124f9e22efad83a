// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use kurbo::{Circle, Line, Point, Rect, Size};
use peniko::Color;
use smallvec::SmallVec;
use storyline_axis::DateAxis;
use storyline_date::{ParsedDate, StoryDate};
use storyline_thumbnail::{ThumbnailCache, ThumbnailDecoder};

use crate::config::LayoutConfig;
use crate::frame::{
    Badge, ImagePlacement, Label, Legend, LegendRow, LegendSection, LegendSwatch, MarkerLayout,
    TextAlign, TextRole, Tick, TimelineFrame,
};
use crate::highlight::HighlightSet;
use crate::images::resolve_thumbnail;
use crate::model::{Event, Roster};
use crate::palette::ColorAssigner;

/// An event from the filtered list together with its parsed date.
#[derive(Copy, Clone, Debug)]
pub struct DatedEvent<'a> {
    /// Position in the filtered list.
    pub filtered_index: usize,
    /// The record.
    pub event: &'a Event,
    /// Parsed form of `event.date`.
    pub date: ParsedDate,
}

/// Per-frame inputs of [`LayoutEngine::layout`].
#[derive(Copy, Clone, Debug)]
pub struct LayoutRequest<'a> {
    /// Filtered events in store order.
    pub events: &'a [DatedEvent<'a>],
    /// Axis built from the same events.
    pub axis: &'a DateAxis,
    /// View size.
    pub size: Size,
    /// Current zoom factor.
    pub zoom: f64,
    /// Character and location records.
    pub roster: Roster<'a>,
    /// Legend highlight.
    pub highlight: &'a HighlightSet,
}

/// Stack position of each event among the events sharing its date.
///
/// Slots count up from 0 in iteration order; unparsable dates get `None`.
///
/// ```rust
/// use storyline_date::{ParsedDate, StoryDate};
/// use storyline_layout::stack_slots;
///
/// let a = ParsedDate::Day(StoryDate::new(2024, 1, 1));
/// let b = ParsedDate::Day(StoryDate::new(2024, 1, 2));
/// let slots = stack_slots([a, b, ParsedDate::Unparsable, a, a]);
/// assert_eq!(slots, [Some(0), Some(0), None, Some(1), Some(2)]);
/// ```
#[must_use]
pub fn stack_slots<I>(dates: I) -> Vec<Option<usize>>
where
    I: IntoIterator<Item = ParsedDate>,
{
    let mut counts: HashMap<StoryDate, usize> = HashMap::new();
    dates
        .into_iter()
        .map(|date| {
            let day = date.day()?;
            let count = counts.entry(day).or_insert(0);
            let slot = *count;
            *count += 1;
            Some(slot)
        })
        .collect()
}

/// Turns the visible events into a [`TimelineFrame`].
///
/// The engine owns the two color memos so that colors stay stable for the
/// lifetime of a view, across redraws and filter changes.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    config: LayoutConfig,
    character_colors: ColorAssigner,
    location_colors: ColorAssigner,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl LayoutEngine {
    /// Creates an engine with the default palettes.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self::with_colors(
            config,
            ColorAssigner::characters(),
            ColorAssigner::locations(),
        )
    }

    /// Creates an engine with custom color memos.
    #[must_use]
    pub fn with_colors(
        config: LayoutConfig,
        character_colors: ColorAssigner,
        location_colors: ColorAssigner,
    ) -> Self {
        Self {
            config,
            character_colors,
            location_colors,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Character color memo.
    #[must_use]
    pub fn character_colors(&self) -> &ColorAssigner {
        &self.character_colors
    }

    /// Mutable character color memo, for seeding or resetting.
    pub fn character_colors_mut(&mut self) -> &mut ColorAssigner {
        &mut self.character_colors
    }

    /// Location color memo.
    #[must_use]
    pub fn location_colors(&self) -> &ColorAssigner {
        &self.location_colors
    }

    /// Mutable location color memo, for seeding or resetting.
    pub fn location_colors_mut(&mut self) -> &mut ColorAssigner {
        &mut self.location_colors
    }

    /// Lays out one frame.
    ///
    /// Colors are assigned while walking the events in order (every attached
    /// character, then the location), then while walking the legend.
    pub fn layout<D: ThumbnailDecoder>(
        &mut self,
        request: &LayoutRequest<'_>,
        thumbnails: &mut ThumbnailCache<D>,
    ) -> TimelineFrame {
        let config = self.config;
        let baseline_y = request.size.height / 2.0;
        let (left, right) = request.axis.baseline();

        let ticks = request
            .axis
            .ticks()
            .map(|(date, x)| Tick {
                date,
                x,
                line: Line::new(
                    (x, baseline_y - config.tick_half_height),
                    (x, baseline_y + config.tick_half_height),
                ),
                label: {
                    let text = date.canonical();
                    let extent = config.text_extent(&text);
                    Label::new(
                        text,
                        Point::new(x, baseline_y - config.tick_label_offset),
                        TextAlign::Center,
                        TextRole::TickDate,
                        config.colors.tick,
                        extent,
                    )
                },
            })
            .collect();

        let slots = stack_slots(request.events.iter().map(|e| e.date));
        let mut markers = Vec::with_capacity(request.events.len());
        for (dated, slot) in request.events.iter().zip(slots) {
            let (Some(date), Some(slot)) = (dated.date.day(), slot) else {
                continue;
            };
            let Some(x) = request.axis.date_to_x(date) else {
                continue;
            };
            let center = Point::new(x, baseline_y + stack_offset(&config, request.zoom, slot));
            markers.push(self.marker(request, thumbnails, dated, date, slot, center));
        }

        let legend = self.legend(request.roster, thumbnails);

        log::trace!(
            "laid out {} markers and {} ticks at zoom {}",
            markers.len(),
            request.axis.len(),
            request.zoom
        );

        TimelineFrame {
            size: request.size,
            zoom: request.zoom,
            baseline_y,
            baseline: Line::new((left, baseline_y), (right, baseline_y)),
            baseline_width: config.baseline_width,
            baseline_color: config.colors.baseline,
            tick_color: config.colors.tick,
            ticks,
            markers,
            legend,
        }
    }

    fn marker<D: ThumbnailDecoder>(
        &mut self,
        request: &LayoutRequest<'_>,
        thumbnails: &mut ThumbnailCache<D>,
        dated: &DatedEvent<'_>,
        date: StoryDate,
        slot: usize,
        center: Point,
    ) -> MarkerLayout {
        let event = dated.event;
        let colors = self.config.colors;

        let character_colors: SmallVec<[Color; 4]> = event
            .characters
            .iter()
            .map(|name| self.character_colors.assign_or_lookup(name))
            .collect();
        let location_color = if event.location.trim().is_empty() {
            None
        } else {
            Some(self.location_colors.assign_or_lookup(&event.location))
        };

        let config = &self.config;
        let dimmed = !request.highlight.admits(&event.characters);
        let (fill, outline, text_color) = if dimmed {
            (colors.dimmed_fill, colors.dimmed_outline, colors.dimmed_label)
        } else {
            (
                character_colors.first().copied().unwrap_or(colors.neutral),
                location_color.unwrap_or(colors.neutral),
                colors.label,
            )
        };

        let radius = config.radius(request.zoom);
        let title = Label::new(
            event.title.clone(),
            Point::new(center.x, center.y - radius - config.title_offset),
            TextAlign::Center,
            TextRole::MarkerTitle,
            text_color,
            config.text_extent(&event.title),
        );
        let activity = (!event.activity.trim().is_empty()).then(|| {
            Label::new(
                event.activity.clone(),
                Point::new(center.x, center.y - radius + config.activity_offset),
                TextAlign::Center,
                TextRole::MarkerActivity,
                text_color,
                config.text_extent(&event.activity),
            )
        });

        let thumbnail = resolve_thumbnail(
            thumbnails,
            event,
            request.roster,
            config.marker_thumbnail,
        )
        .map(|thumb| {
            ImagePlacement::left_center(thumb, center.x + radius + config.thumbnail_gap, center.y)
        });

        let badge_radius = config.badge_radius(request.zoom);
        let badge_step = 2.0 * badge_radius + config.badge_gap;
        let row_width = event.characters.len() as f64 * badge_step - config.badge_gap;
        let badge_y = center.y + radius + config.badge_offset;
        let first_x = center.x - row_width / 2.0 + badge_radius;
        let badges = event
            .characters
            .iter()
            .zip(&character_colors)
            .enumerate()
            .map(|(i, (name, color))| {
                let x = first_x + i as f64 * badge_step;
                Badge {
                    circle: Circle::new((x, badge_y), badge_radius),
                    fill: if dimmed { colors.dimmed_badge } else { *color },
                    outline: colors.badge_outline,
                    character: name.clone(),
                }
            })
            .collect();

        MarkerLayout {
            filtered_index: dated.filtered_index,
            date,
            stack_slot: slot,
            circle: Circle::new(center, radius),
            fill,
            outline,
            outline_width: config.outline_width,
            dimmed,
            title,
            activity,
            thumbnail,
            badges,
        }
    }

    fn legend<D: ThumbnailDecoder>(
        &mut self,
        roster: Roster<'_>,
        thumbnails: &mut ThumbnailCache<D>,
    ) -> Legend {
        let legend_config = self.config.legend;
        let colors = self.config.colors;
        let x = legend_config.origin.x;
        let mut y = legend_config.origin.y;
        let dot = legend_config.dot_radius;
        let text_x = x + 2.0 * dot + legend_config.text_gap;
        let mut legend = Legend::default();

        let config = self.config;
        let heading = |text: &str, y: f64| {
            Label::new(
                text.to_owned(),
                Point::new(x, y),
                TextAlign::TopLeft,
                TextRole::LegendHeading,
                colors.label,
                config.text_extent(text),
            )
        };
        let entry = |text: &str, y: f64| {
            Label::new(
                text.to_owned(),
                Point::new(text_x, y - 2.0),
                TextAlign::TopLeft,
                TextRole::LegendEntry,
                colors.label,
                config.text_extent(text),
            )
        };
        let row_bounds =
            |y: f64| Rect::new(x, y, x + legend_config.row_width, y + legend_config.line_height);

        let mut characters = roster
            .characters()
            .iter()
            .filter(|c| !c.name.trim().is_empty())
            .peekable();
        if characters.peek().is_some() {
            legend.headings.push(heading("Characters", y));
            y += legend_config.line_height;
            for character in characters {
                let color = self.character_colors.assign_or_lookup(&character.name);
                let portrait = character
                    .image_path()
                    .and_then(|path| thumbnails.get_sized(path, legend_config.thumbnail));
                let swatch = match portrait {
                    Some(thumb) => {
                        let w = f64::from(legend_config.thumbnail.width);
                        let h = f64::from(legend_config.thumbnail.height);
                        LegendSwatch::Thumbnail(ImagePlacement::centered(
                            thumb,
                            Point::new(x + w / 2.0, y + h / 2.0 - 2.0),
                        ))
                    }
                    None => LegendSwatch::Dot {
                        circle: Circle::new((x + dot, y + dot), dot),
                        fill: color,
                        outline: colors.legend_dot_outline,
                    },
                };
                legend.rows.push(LegendRow {
                    section: LegendSection::Characters,
                    name: character.name.clone(),
                    swatch,
                    label: entry(&character.name, y),
                    bounds: row_bounds(y),
                });
                y += legend_config.line_height;
            }
        }

        let mut locations = roster
            .locations()
            .iter()
            .filter(|l| !l.name.trim().is_empty())
            .peekable();
        if locations.peek().is_some() {
            if !legend.headings.is_empty() {
                y += legend_config.section_gap;
            }
            legend.headings.push(heading("Locations", y));
            y += legend_config.line_height;
            for location in locations {
                let color = self.location_colors.assign_or_lookup(&location.name);
                legend.rows.push(LegendRow {
                    section: LegendSection::Locations,
                    name: location.name.clone(),
                    swatch: LegendSwatch::Ring {
                        circle: Circle::new((x + dot, y + dot), dot),
                        stroke: color,
                        width: 2.0,
                    },
                    label: entry(&location.name, y),
                    bounds: row_bounds(y),
                });
                y += legend_config.line_height;
            }
        }

        if !legend.headings.is_empty() {
            let origin = legend_config.origin;
            legend.background = Some(
                Rect::new(origin.x, origin.y, origin.x + legend_config.row_width, y)
                    .inflate(legend_config.padding, legend_config.padding),
            );
        }
        legend
    }
}

fn stack_offset(config: &LayoutConfig, zoom: f64, slot: usize) -> f64 {
    slot as f64 * config.stack_step(zoom)
}
