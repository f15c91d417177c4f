//! Session history of visited locations.
//!
//! The host keeps a browser-style history: navigating pushes a new location
//! and discards anything ahead of the cursor, while back and forward move the
//! cursor without changing the stack.

use super::location::Location;

/// Stack of visited locations with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    /// Pushes a location, dropping any forward entries.
    ///
    /// Pushing the current location again is a no-op.
    pub fn push(&mut self, location: Location) {
        if *self.current() == location {
            return;
        }

        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
    }

    /// Overwrites the current entry in place.
    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    /// Moves one entry back, returning the new current location.
    pub fn back(&mut self) -> Option<&Location> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Moves one entry forward, returning the new current location.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(text: &str) -> Location {
        Location::parse(text)
    }

    #[test]
    fn back_and_forward_walk_the_stack() {
        let mut history = History::new(loc("/?page=1"));
        history.push(loc("/?page=2"));
        history.push(loc("/?page=3"));

        assert_eq!(history.back(), Some(&loc("/?page=2")));
        assert_eq!(history.back(), Some(&loc("/?page=1")));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(&loc("/?page=2")));
        assert_eq!(history.current(), &loc("/?page=2"));
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = History::new(loc("/?page=1"));
        history.push(loc("/?page=2"));
        history.back();

        history.push(loc("/?page=5"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.forward(), None);
        assert_eq!(history.current(), &loc("/?page=5"));
    }

    #[test]
    fn replace_keeps_the_cursor() {
        let mut history = History::new(loc("/?page=1"));
        history.push(loc("/?page=9"));

        history.replace(loc("/?page=2"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.back(), Some(&loc("/?page=1")));
        assert_eq!(history.forward(), Some(&loc("/?page=2")));
    }

    #[test]
    fn pushing_the_current_location_is_a_no_op() {
        let mut history = History::new(loc("/?page=1"));

        history.push(loc("/?page=1"));

        assert_eq!(history.len(), 1);
    }
}
