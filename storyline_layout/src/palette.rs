// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use peniko::Color;

/// The ten character colors, in assignment order.
#[must_use]
pub fn default_character_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x3d, 0x9c, 0xd6),
        Color::from_rgb8(0xa7, 0xf3, 0xd0),
        Color::from_rgb8(0xcd, 0x56, 0x99),
        Color::from_rgb8(0xb7, 0x6b, 0xe0),
        Color::from_rgb8(0x20, 0x47, 0xe6),
        Color::from_rgb8(0xa2, 0x09, 0x09),
        Color::from_rgb8(0x56, 0x91, 0xd4),
        Color::from_rgb8(0xd8, 0xb4, 0xfe),
        Color::from_rgb8(0xfd, 0xba, 0x74),
        Color::from_rgb8(0x86, 0xef, 0xac),
    ]
}

/// The ten location colors, in assignment order.
#[must_use]
pub fn default_location_palette() -> Vec<Color> {
    vec![
        Color::from_rgb8(0x33, 0x41, 0x55),
        Color::from_rgb8(0x3f, 0x62, 0x12),
        Color::from_rgb8(0x15, 0x5e, 0x75),
        Color::from_rgb8(0x7c, 0x2d, 0x12),
        Color::from_rgb8(0xda, 0x7a, 0xdf),
        Color::from_rgb8(0x5e, 0x93, 0xdc),
        Color::from_rgb8(0x14, 0x53, 0x2d),
        Color::from_rgb8(0x45, 0x72, 0xdb),
        Color::from_rgb8(0x71, 0x3f, 0x12),
        Color::from_rgb8(0x54, 0xd8, 0x8b),
    ]
}

/// Session-scoped name → color memo.
///
/// The first time a name is seen it receives
/// `palette[assigned_count % palette.len()]`; afterwards the same name always
/// answers the same color. Assignment order is therefore first-seen order,
/// which the layout keeps deterministic by walking events in store order.
///
/// ```rust
/// use storyline_layout::ColorAssigner;
///
/// let mut colors = ColorAssigner::characters();
/// let ada = colors.assign_or_lookup("Ada");
/// let bo = colors.assign_or_lookup("Bo");
/// assert_ne!(ada.to_rgba8(), bo.to_rgba8());
/// assert_eq!(colors.assign_or_lookup("Ada").to_rgba8(), ada.to_rgba8());
/// ```
#[derive(Clone, Debug)]
pub struct ColorAssigner {
    palette: Vec<Color>,
    assigned: HashMap<String, Color>,
}

impl ColorAssigner {
    /// Creates an assigner cycling through `palette`.
    ///
    /// An empty palette is replaced by a single mid gray.
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            vec![Color::from_rgb8(0x88, 0x88, 0x88)]
        } else {
            palette
        };
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Creates an assigner with the default character palette.
    #[must_use]
    pub fn characters() -> Self {
        Self::new(default_character_palette())
    }

    /// Creates an assigner with the default location palette.
    #[must_use]
    pub fn locations() -> Self {
        Self::new(default_location_palette())
    }

    /// Returns the palette.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Returns the number of names that have a color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Returns `true` if no name has a color yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Returns the color of `name`, assigning the next palette slot if the
    /// name is new.
    pub fn assign_or_lookup(&mut self, name: &str) -> Color {
        if let Some(color) = self.assigned.get(name) {
            return *color;
        }
        let color = self.palette[self.assigned.len() % self.palette.len()];
        self.assigned.insert(name.to_owned(), color);
        color
    }

    /// Returns the color of `name` without assigning one.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Color> {
        self.assigned.get(name).copied()
    }

    /// Pins `name` to `color`.
    ///
    /// A seeded name counts as assigned, so the next new name moves on to the
    /// following palette slot.
    pub fn seed(&mut self, name: &str, color: Color) {
        self.assigned.insert(name.to_owned(), color);
    }

    /// Forgets every assignment.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}
