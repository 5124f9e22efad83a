// Copyright 2025 the Storyline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Records read by the layout: events, characters and locations.

/// A narrative event as the store hands it out.
///
/// The date is kept as the author typed it; parsing happens at layout time.
/// Character and location references are plain names and need not resolve to
/// a record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    /// Short title shown above the marker.
    pub title: String,
    /// Free-text date.
    pub date: String,
    /// Names of the attached characters, in author order.
    pub characters: Vec<String>,
    /// What happens; shown under the title when non-empty.
    pub activity: String,
    /// Name of the location, possibly empty.
    pub location: String,
    /// Optional image path.
    pub image: Option<String>,
}

impl Event {
    /// Creates an event with a title and date text and nothing else.
    #[must_use]
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with the given characters attached.
    #[must_use]
    pub fn with_characters<I, S>(mut self, characters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characters = characters.into_iter().map(Into::into).collect();
        self
    }

    /// Returns a copy with an activity.
    #[must_use]
    pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
        self.activity = activity.into();
        self
    }

    /// Returns a copy with a location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Returns a copy with an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The first attached character, which decides the marker fill.
    #[must_use]
    pub fn first_character(&self) -> Option<&str> {
        self.characters.first().map(String::as_str)
    }

    /// The event's own image path, if set and not blank.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }
}

/// A named character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Character {
    /// Name events refer to.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Optional portrait path.
    pub image: Option<String>,
}

impl Character {
    /// Creates a character with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns a copy with an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The image path, if set and not blank.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }
}

/// A named location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Name events refer to.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Optional picture path.
    pub image: Option<String>,
}

impl Location {
    /// Creates a location with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns a copy with a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns a copy with an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// The image path, if set and not blank.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }
}

/// Borrowed view of the character and location records.
///
/// Lookups are by exact name; when several records share a name the first
/// one wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct Roster<'a> {
    characters: &'a [Character],
    locations: &'a [Location],
}

impl<'a> Roster<'a> {
    /// Wraps the two record lists.
    #[must_use]
    pub const fn new(characters: &'a [Character], locations: &'a [Location]) -> Self {
        Self {
            characters,
            locations,
        }
    }

    /// All characters, in store order.
    #[must_use]
    pub fn characters(&self) -> &'a [Character] {
        self.characters
    }

    /// All locations, in store order.
    #[must_use]
    pub fn locations(&self) -> &'a [Location] {
        self.locations
    }

    /// Looks up a character by name.
    #[must_use]
    pub fn character(&self, name: &str) -> Option<&'a Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Looks up a location by name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&'a Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Image path of the named character, if any.
    #[must_use]
    pub fn character_image(&self, name: &str) -> Option<&'a str> {
        self.character(name).and_then(Character::image_path)
    }

    /// Image path of the named location, if any.
    #[must_use]
    pub fn location_image(&self, name: &str) -> Option<&'a str> {
        self.location(name).and_then(Location::image_path)
    }
}

fn non_blank(path: Option<&str>) -> Option<&str> {
    path.map(str::trim).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{Character, Event, Location, Roster};

    #[test]
    fn blank_image_paths_count_as_missing() {
        let event = Event::new("Duel", "1/1/2020").with_image("   ");
        assert_eq!(event.image_path(), None);
        let event = event.with_image(" a.png ");
        assert_eq!(event.image_path(), Some("a.png"));
    }

    #[test]
    fn roster_lookups_take_the_first_match() {
        let characters = [
            Character::new("Ada").with_image("first.png"),
            Character::new("Ada").with_image("second.png"),
            Character::new("Bo"),
        ];
        let locations = [Location::new("Harbor").with_image("harbor.png")];
        let roster = Roster::new(&characters, &locations);

        assert_eq!(roster.character_image("Ada"), Some("first.png"));
        assert_eq!(roster.character_image("Bo"), None);
        assert_eq!(roster.character_image("Nobody"), None);
        assert_eq!(roster.location_image("Harbor"), Some("harbor.png"));
        assert!(roster.location("harbor").is_none());
    }

    #[test]
    fn first_character_follows_author_order() {
        let event = Event::new("Meeting", "").with_characters(["Bo", "Ada"]);
        assert_eq!(event.first_character(), Some("Bo"));
        assert_eq!(Event::default().first_character(), None);
    }
}
