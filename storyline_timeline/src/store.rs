// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between the view and whoever owns the records.

use core::fmt;

use hashbrown::HashSet;
use storyline_date::{DateParser, ParsedDate};
use storyline_layout::{Character, Event, Location};

/// Stable identity of an event inside a store.
///
/// Filtered positions shift whenever the filter or the sort order changes;
/// an `EventId` does not.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u64);

impl EventId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the timeline reads from and writes to.
///
/// The view renders exactly the events [`TimelineStore::filtered_events`]
/// returns, in that order; filtering and searching are the store's business.
/// The only mutation the view ever issues is
/// [`TimelineStore::reassign_date`].
pub trait TimelineStore {
    /// Error returned when a reassignment is rejected.
    type Error: core::error::Error;

    /// Currently visible events in display order.
    fn filtered_events(&self) -> Vec<(EventId, &Event)>;

    /// All characters.
    fn characters(&self) -> &[Character];

    /// All locations.
    fn locations(&self) -> &[Location];

    /// Replaces the date text of an event.
    fn reassign_date(&mut self, id: EventId, date: &str) -> Result<(), Self::Error>;
}

/// Error type of [`MemoryStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No event has this id.
    UnknownEvent(EventId),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEvent(id) => write!(f, "no event with id {id}"),
        }
    }
}

impl core::error::Error for StoreError {}

/// A simple in-memory [`TimelineStore`].
///
/// Useful for tests and small tools. Visibility is controlled with
/// [`MemoryStore::set_visible`] and [`MemoryStore::show_all`], which stand in
/// for an external search filter.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    events: Vec<(EventId, Event)>,
    characters: Vec<Character>,
    locations: Vec<Location>,
    visible: Option<HashSet<EventId>>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and returns its id.
    pub fn push_event(&mut self, event: Event) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.events.push((id, event));
        id
    }

    /// Appends a character.
    pub fn push_character(&mut self, character: Character) {
        self.characters.push(character);
    }

    /// Appends a location.
    pub fn push_location(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// Removes an event, returning it.
    pub fn remove_event(&mut self, id: EventId) -> Option<Event> {
        let index = self.events.iter().position(|(eid, _)| *eid == id)?;
        if let Some(visible) = &mut self.visible {
            visible.remove(&id);
        }
        Some(self.events.remove(index).1)
    }

    /// Looks up an event.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, event)| event)
    }

    /// All events in store order, ignoring the filter.
    pub fn events(&self) -> impl Iterator<Item = (EventId, &Event)> + '_ {
        self.events.iter().map(|(id, event)| (*id, event))
    }

    /// Number of events, ignoring the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the store holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Stable-sorts events by parsed date; unparsable dates go last.
    pub fn sort_by_date(&mut self, parser: &DateParser) {
        self.events
            .sort_by_cached_key(|(_, event)| parser.parse(&event.date));
    }

    /// Restricts [`TimelineStore::filtered_events`] to `ids`.
    pub fn set_visible<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = EventId>,
    {
        self.visible = Some(ids.into_iter().collect());
    }

    /// Makes every event visible again.
    pub fn show_all(&mut self) {
        self.visible = None;
    }

    /// Parsed date of an event.
    #[must_use]
    pub fn parsed_date(&self, id: EventId, parser: &DateParser) -> Option<ParsedDate> {
        self.event(id).map(|event| parser.parse(&event.date))
    }
}

impl TimelineStore for MemoryStore {
    type Error = StoreError;

    fn filtered_events(&self) -> Vec<(EventId, &Event)> {
        self.events
            .iter()
            .filter(|(id, _)| self.visible.as_ref().is_none_or(|v| v.contains(id)))
            .map(|(id, event)| (*id, event))
            .collect()
    }

    fn characters(&self) -> &[Character] {
        &self.characters
    }

    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn reassign_date(&mut self, id: EventId, date: &str) -> Result<(), StoreError> {
        let (_, event) = self
            .events
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .ok_or(StoreError::UnknownEvent(id))?;
        event.date = date.trim().to_owned();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use storyline_date::DateParser;
    use storyline_layout::Event;

    use super::{EventId, MemoryStore, StoreError, TimelineStore};

    #[test]
    fn ids_are_stable_across_sorting() {
        let mut store = MemoryStore::new();
        let late = store.push_event(Event::new("late", "2024-05-01"));
        let unknown = store.push_event(Event::new("unknown", "whenever"));
        let early = store.push_event(Event::new("early", "1/1/2024"));

        store.sort_by_date(&DateParser::new(2024));
        let order: Vec<_> = store.events().map(|(id, _)| id).collect();
        assert_eq!(order, [early, late, unknown]);
        assert_eq!(store.event(late).map(|e| e.title.as_str()), Some("late"));
    }

    #[test]
    fn sorting_is_stable_for_equal_dates() {
        let mut store = MemoryStore::new();
        let a = store.push_event(Event::new("a", "2 jan 2024"));
        let b = store.push_event(Event::new("b", "1 jan 2024"));
        let c = store.push_event(Event::new("c", "2/1/2024"));
        store.sort_by_date(&DateParser::new(2024));
        let order: Vec<_> = store.events().map(|(id, _)| id).collect();
        assert_eq!(order, [b, a, c]);
    }

    #[test]
    fn visibility_filters_without_reordering() {
        let mut store = MemoryStore::new();
        let a = store.push_event(Event::new("a", ""));
        let b = store.push_event(Event::new("b", ""));
        let c = store.push_event(Event::new("c", ""));

        store.set_visible([c, a]);
        let ids: Vec<_> = store.filtered_events().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, [a, c]);

        store.show_all();
        assert_eq!(store.filtered_events().len(), 3);
        assert!(store.remove_event(b).is_some());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reassign_trims_and_rejects_unknown_ids() {
        let mut store = MemoryStore::new();
        let id = store.push_event(Event::new("a", "1 jan"));
        store.reassign_date(id, "  3/1/2024 ").unwrap();
        assert_eq!(store.event(id).unwrap().date, "3/1/2024");

        let missing = EventId::new(99);
        assert_eq!(
            store.reassign_date(missing, "1/1/2024"),
            Err(StoreError::UnknownEvent(missing))
        );
        assert_eq!(
            StoreError::UnknownEvent(missing).to_string(),
            "no event with id #99"
        );
    }
}
