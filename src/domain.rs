//! Domain models for course enlistment.
//!
//! This module contains the core domain types: subjects, rooms, schedules,
//! sections, degree programs, and the student aggregate that drives the
//! enlistment validation pipeline.

/// Validated identifier strings for rooms, subjects, and sections.
pub mod code;
pub use code::{CodeString, InvalidCodeError};

mod config;
pub use config::Config;

/// Fixed-point peso amounts for tuition assessment.
pub mod money;
pub use money::Money;

/// Degree programs and their subject offerings.
pub mod program;
pub use program::DegreeProgram;

/// Rooms and their seating capacity.
pub mod room;
pub use room::Room;

pub mod rules;
pub use rules::{EnlistError, EnlistmentRule, ENLISTMENT_RULES};

/// Day patterns, periods, and weekly schedules.
pub mod schedule;
pub use schedule::{Days, InvalidPeriodError, Period, Schedule};

/// Offered sections and room-conflict resolution.
pub mod section;
pub use section::{RoomConflictError, Section};

/// Subjects, units, and prerequisites.
pub mod subject;
pub use subject::Subject;

/// The student aggregate.
pub mod student;
pub use student::{NotEnrolledError, Student};
