// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::drag::DragState;
use crate::store::EventId;

/// Mouse buttons the view distinguishes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button: drags markers, toggles legend entries.
    Primary,
    /// Usually the right button: pans.
    Secondary,
    /// Usually the wheel button: pans.
    Middle,
}

impl PointerButton {
    /// Returns `true` for the buttons that pan the axis.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Secondary | Self::Middle)
    }
}

/// The one gesture in progress.
///
/// Only one gesture can be active at a time; a press that would start a
/// second one is ignored until the first is released.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Gesture {
    /// No button held.
    #[default]
    Idle,
    /// Horizontal scrolling with a secondary or middle button held.
    Panning {
        /// Button that started the pan; only its release ends it.
        button: PointerButton,
        /// Pointer tracking.
        drag: DragState,
    },
    /// A marker grabbed with the primary button.
    DraggingEvent {
        /// Store identity of the grabbed event, resolved at press time.
        event: EventId,
        /// Filtered position of the grabbed event at press time.
        filtered_index: usize,
        /// Pointer tracking.
        drag: DragState,
    },
}

impl Gesture {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns `true` while panning.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Returns the grabbed event while dragging one.
    #[must_use]
    pub fn dragged_event(&self) -> Option<EventId> {
        match self {
            Self::DraggingEvent { event, .. } => Some(*event),
            _ => None,
        }
    }
}
