//! University course-enlistment domain core.
//!
//! Students enlist in [`Section`]s of [`Subject`]s, subject to scheduling,
//! capacity, prerequisite, program-membership, and unit-load constraints,
//! and receive a tuition assessment as an exact fixed-point [`Money`]
//! amount. Validation runs as an ordered, fail-fast rule chain; every
//! rejection carries a specific, typed reason.
//!
//! Persistence, transport, and user interfaces are out of scope: external
//! collaborators construct the validated entities and drive
//! [`Student::enlist`], [`Student::cancel`], and
//! [`Student::request_assessment`].

pub mod domain;
pub use domain::{
    CodeString, Config, Days, DegreeProgram, EnlistError, Money, NotEnrolledError, Period, Room,
    RoomConflictError, Schedule, Section, Student, Subject,
};
