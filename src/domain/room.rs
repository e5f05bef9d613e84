use std::fmt;

use crate::domain::code::CodeString;

/// A physical room with a fixed seating capacity.
///
/// Immutable value object; two rooms are equal when both name and capacity
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room {
    name: CodeString,
    capacity: u32,
}

impl Room {
    /// Creates a room from a pre-validated name and a capacity.
    #[must_use]
    pub const fn new(name: CodeString, capacity: u32) -> Self {
        Self { name, capacity }
    }

    /// The room's name.
    #[must_use]
    pub const fn name(&self) -> &CodeString {
        &self.name
    }

    /// The number of seats in the room.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether `count` occupants fill the room.
    ///
    /// Fullness is reached, not exceeded, at the boundary: with capacity
    /// `N`, the `N`th occupant makes the room full for the `(N+1)`th.
    #[must_use]
    pub const fn is_full(&self, count: u32) -> bool {
        count >= self.capacity
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: u32) -> Room {
        Room::new("A1".parse().unwrap(), capacity)
    }

    #[test]
    fn fullness_is_reached_at_the_boundary() {
        let room = room(2);
        assert!(!room.is_full(0));
        assert!(!room.is_full(1));
        assert!(room.is_full(2));
        assert!(room.is_full(3));
    }

    #[test]
    fn zero_capacity_room_is_always_full() {
        assert!(room(0).is_full(0));
    }

    #[test]
    fn equality_is_by_name_and_capacity() {
        assert_eq!(room(2), room(2));
        assert_ne!(room(2), room(3));
        assert_ne!(room(2), Room::new("A2".parse().unwrap(), 2));
    }
}
