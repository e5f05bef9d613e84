use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicU32, Ordering},
    },
};

use tracing::debug;

use crate::domain::{
    code::CodeString, room::Room, rules::EnlistError, schedule::Schedule, subject::Subject,
};

/// An offered section: a subject taught on a schedule in a room.
///
/// Identity and equality are by section code alone. A `Section` is a
/// cheaply-cloneable shared handle — every student enlisted in a section
/// holds the same underlying seat counter, and seat reservation is an
/// atomic compare-and-increment that refuses to overshoot the room's
/// capacity.
///
/// The room assignment is the one mutable binding: conflict resolution can
/// [clear it](Self::clear_room), after which the section cannot seat
/// anyone until the catalog reassigns it.
#[derive(Debug, Clone)]
pub struct Section {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    code: CodeString,
    schedule: Schedule,
    subject: Subject,
    room: RwLock<Option<Room>>,
    seats: AtomicU32,
}

impl Section {
    /// Creates a section from pre-validated parts with no one enlisted.
    #[must_use]
    pub fn new(code: CodeString, schedule: Schedule, room: Room, subject: Subject) -> Self {
        Self {
            inner: Arc::new(Inner {
                code,
                schedule,
                subject,
                room: RwLock::new(Some(room)),
                seats: AtomicU32::new(0),
            }),
        }
    }

    /// The section's code.
    #[must_use]
    pub fn code(&self) -> &CodeString {
        &self.inner.code
    }

    /// The section's weekly meeting slot.
    #[must_use]
    pub fn schedule(&self) -> Schedule {
        self.inner.schedule
    }

    /// The subject taught in this section.
    #[must_use]
    pub fn subject(&self) -> &Subject {
        &self.inner.subject
    }

    /// The currently assigned room, or `None` if conflict resolution has
    /// cleared it.
    #[must_use]
    pub fn room(&self) -> Option<Room> {
        self.inner
            .room
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The number of students currently seated in the section.
    #[must_use]
    pub fn enrolled_count(&self) -> u32 {
        self.inner.seats.load(Ordering::SeqCst)
    }

    /// Whether this section's schedule overlaps the other's.
    #[must_use]
    pub fn schedule_conflicts_with(&self, other: &Self) -> bool {
        self.inner.schedule.overlaps(other.inner.schedule)
    }

    /// Whether the two sections are double-booked: same room, overlapping
    /// schedules. A section with no room assignment never conflicts.
    ///
    /// Pure predicate; see [`Self::check_room_conflict`] for the consuming
    /// form used during catalog placement.
    #[must_use]
    pub fn room_conflicts_with(&self, other: &Self) -> bool {
        match (self.room(), other.room()) {
            (Some(mine), Some(theirs)) => {
                mine == theirs && self.schedule_conflicts_with(other)
            }
            _ => false,
        }
    }

    /// Clears the room assignment.
    pub fn clear_room(&self) {
        let mut slot = self
            .inner
            .room
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(room) = slot.take() {
            debug!(section = %self.inner.code, room = %room, "room assignment cleared");
        }
    }

    /// Checks this section against another candidate for the same room,
    /// failing when they are double-booked.
    ///
    /// On conflict the *other* section loses its room assignment before the
    /// error is returned, so a repeat call will report no conflict. Callers
    /// must treat this as a consuming check, not an idempotent query.
    ///
    /// # Errors
    ///
    /// Returns [`RoomConflictError`] when both sections hold the same room
    /// and their schedules overlap.
    pub fn check_room_conflict(&self, other: &Self) -> Result<(), RoomConflictError> {
        let (Some(mine), Some(theirs)) = (self.room(), other.room()) else {
            return Ok(());
        };
        if mine == theirs && self.schedule_conflicts_with(other) {
            other.clear_room();
            return Err(RoomConflictError {
                first: self.inner.code.clone(),
                second: other.inner.code.clone(),
                room: mine.name().clone(),
            });
        }
        Ok(())
    }

    /// Reserves one seat, refusing to overshoot the room's capacity.
    ///
    /// The reservation is a compare-and-increment on the seat counter, so
    /// concurrent reservations against the same section serialize here and
    /// at most `capacity` of them succeed.
    ///
    /// # Errors
    ///
    /// Returns [`EnlistError::RoomUnassigned`] when the section has no
    /// room, or [`EnlistError::CapacityReached`] when the room is full.
    pub fn try_add_seat(&self) -> Result<(), EnlistError> {
        let Some(room) = self.room() else {
            return Err(EnlistError::RoomUnassigned {
                section: self.inner.code.clone(),
            });
        };
        let mut enrolled = self.inner.seats.load(Ordering::SeqCst);
        loop {
            if room.is_full(enrolled) {
                return Err(EnlistError::CapacityReached {
                    section: self.inner.code.clone(),
                    room: room.name().clone(),
                    capacity: room.capacity(),
                });
            }
            match self.inner.seats.compare_exchange(
                enrolled,
                enrolled + 1,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return Ok(()),
                Err(actual) => enrolled = actual,
            }
        }
    }

    /// Releases one seat, saturating at zero.
    pub fn release_seat(&self) {
        let _ = self
            .inner
            .seats
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_sub(1))
            });
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.inner.code == other.inner.code
    }
}

impl Eq for Section {}

impl Hash for Section {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.code.hash(state);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.inner.code)
    }
}

/// Error returned when two sections are found double-booked into one room.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("sections {first} and {second} share room {room} with overlapping schedules")]
pub struct RoomConflictError {
    /// The section that initiated the check.
    pub first: CodeString,
    /// The section that lost its room assignment.
    pub second: CodeString,
    /// The contested room.
    pub room: CodeString,
}
