// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Character names picked from the legend.
///
/// While the set is empty nothing is dimmed. Once it holds at least one name,
/// only events attached to a highlighted character keep their colors.
///
/// Names are kept in a small `Vec` in insertion order with uniqueness
/// enforced by equality; legends are short. The revision counter is bumped
/// only when the contents actually change, so observers can cheaply tell
/// whether a relayout is needed.
///
/// ```rust
/// use storyline_layout::HighlightSet;
///
/// let mut highlight = HighlightSet::new();
/// assert!(highlight.admits(&[]));
///
/// highlight.toggle("Ada");
/// assert!(highlight.admits(&["Bo".into(), "Ada".into()]));
/// assert!(!highlight.admits(&["Bo".into()]));
/// assert!(!highlight.admits(&[]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct HighlightSet {
    names: Vec<String>,
    revision: u64,
}

impl HighlightSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of highlighted names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Highlighted names in the order they were added.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if `name` is highlighted.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds `name` if absent, removes it if present.
    ///
    /// Returns `true` if `name` is highlighted afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        let added = if let Some(idx) = self.position_of(name) {
            self.names.remove(idx);
            false
        } else {
            self.names.push(name.to_owned());
            true
        };
        self.bump_revision();
        added
    }

    /// Adds `name` if absent.
    pub fn insert(&mut self, name: &str) {
        if self.position_of(name).is_none() {
            self.names.push(name.to_owned());
            self.bump_revision();
        }
    }

    /// Removes `name` if present.
    pub fn remove(&mut self, name: &str) {
        if let Some(idx) = self.position_of(name) {
            self.names.remove(idx);
            self.bump_revision();
        }
    }

    /// Removes every name.
    ///
    /// Returns `true` if the set was non-empty.
    pub fn clear(&mut self) -> bool {
        if self.names.is_empty() {
            return false;
        }
        self.names.clear();
        self.bump_revision();
        true
    }

    /// Returns `true` if an event with these characters keeps its colors:
    /// nothing is highlighted, or one of `characters` is.
    #[must_use]
    pub fn admits(&self, characters: &[String]) -> bool {
        self.is_empty() || characters.iter().any(|c| self.contains(c))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
