//! The enlistment validation pipeline.
//!
//! Enlisting runs an ordered, fail-fast chain of checks against the
//! candidate section. The order is semantically significant — it decides
//! which error is surfaced when several violations co-exist — so the chain
//! is kept as a data structure, [`ENLISTMENT_RULES`], rather than buried
//! control flow. Each rule is a plain function and can be exercised on its
//! own.

use crate::domain::{code::CodeString, section::Section, student::Student};

/// A single validation rule applied to a candidate section.
pub type EnlistmentRule = fn(&Student, &Section) -> Result<(), EnlistError>;

/// The checks run, in order, before a student is seated in a section.
pub const ENLISTMENT_RULES: &[EnlistmentRule] = &[
    no_schedule_conflict,
    seat_available,
    no_duplicate_subject,
    prerequisites_taken,
    within_unit_load,
    subject_in_program,
];

/// Why an enlistment was refused.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EnlistError {
    /// The candidate meets at the same time as a section the student
    /// already holds.
    #[error("section {candidate} overlaps the schedule of enlisted section {existing}")]
    ScheduleConflict {
        /// The already-enlisted section.
        existing: CodeString,
        /// The candidate section.
        candidate: CodeString,
    },

    /// The candidate's room is already at capacity.
    #[error("section {section} is full: room {room} seats {capacity}")]
    CapacityReached {
        /// The candidate section.
        section: CodeString,
        /// The room that is full.
        room: CodeString,
        /// The room's capacity.
        capacity: u32,
    },

    /// The candidate lost its room to conflict resolution and cannot seat
    /// anyone.
    #[error("section {section} has no room assigned")]
    RoomUnassigned {
        /// The candidate section.
        section: CodeString,
    },

    /// The student already holds a section of the same subject.
    #[error("already enlisted in section {existing} of subject {subject}")]
    DuplicateSubject {
        /// The already-enlisted section of the subject.
        existing: CodeString,
        /// The subject offered by both sections.
        subject: CodeString,
    },

    /// The candidate's subject has prerequisites the student has not taken.
    #[error("subject {subject} requires prerequisites not yet taken: {}", join(.missing))]
    PrerequisiteNotMet {
        /// The candidate's subject.
        subject: CodeString,
        /// The prerequisites missing from the student's history, sorted.
        missing: Vec<CodeString>,
    },

    /// Enlisting would push the student past the unit-load ceiling.
    #[error("{candidate} more units on top of {enrolled} would exceed the {max}-unit limit")]
    MaxUnitsExceeded {
        /// Units the student is already enlisted in.
        enrolled: u32,
        /// Units the candidate section adds.
        candidate: u32,
        /// The unit-load ceiling.
        max: u32,
    },

    /// The candidate's subject is not offered in the student's program.
    #[error("subject {subject} is not offered in program {program}")]
    SubjectNotInProgram {
        /// The candidate's subject.
        subject: CodeString,
        /// The student's program name.
        program: String,
    },
}

fn join(codes: &[CodeString]) -> String {
    codes
        .iter()
        .map(CodeString::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The candidate must not meet at the same time as any enlisted section.
///
/// # Errors
///
/// Returns [`EnlistError::ScheduleConflict`] naming the enlisted section
/// whose schedule overlaps the candidate's.
pub fn no_schedule_conflict(student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    for enlisted in student.sections() {
        if enlisted.schedule_conflicts_with(candidate) {
            return Err(EnlistError::ScheduleConflict {
                existing: enlisted.code().clone(),
                candidate: candidate.code().clone(),
            });
        }
    }
    Ok(())
}

/// The candidate must have a room with a free seat.
///
/// This is a read of the seat counter; the actual reservation re-validates
/// capacity atomically when the student is seated.
///
/// # Errors
///
/// Returns [`EnlistError::RoomUnassigned`] when the candidate has no room,
/// or [`EnlistError::CapacityReached`] when its room is full.
pub fn seat_available(_student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    let Some(room) = candidate.room() else {
        return Err(EnlistError::RoomUnassigned {
            section: candidate.code().clone(),
        });
    };
    if room.is_full(candidate.enrolled_count()) {
        return Err(EnlistError::CapacityReached {
            section: candidate.code().clone(),
            room: room.name().clone(),
            capacity: room.capacity(),
        });
    }
    Ok(())
}

/// The student must not already hold a section of the candidate's subject.
///
/// # Errors
///
/// Returns [`EnlistError::DuplicateSubject`] naming the enlisted section
/// that already offers the subject.
pub fn no_duplicate_subject(student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    for enlisted in student.sections() {
        if enlisted.subject() == candidate.subject() {
            return Err(EnlistError::DuplicateSubject {
                existing: enlisted.code().clone(),
                subject: candidate.subject().code().clone(),
            });
        }
    }
    Ok(())
}

/// Every directly-declared prerequisite of the candidate's subject must be
/// in the student's taken-subject history.
///
/// # Errors
///
/// Returns [`EnlistError::PrerequisiteNotMet`] listing the missing
/// prerequisites.
pub fn prerequisites_taken(student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    let mut missing: Vec<CodeString> = candidate
        .subject()
        .prerequisites()
        .filter(|prerequisite| !student.has_taken(prerequisite))
        .map(|prerequisite| prerequisite.code().clone())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(EnlistError::PrerequisiteNotMet {
            subject: candidate.subject().code().clone(),
            missing,
        })
    }
}

/// Enlisted units plus the candidate's units must stay within the ceiling.
///
/// # Errors
///
/// Returns [`EnlistError::MaxUnitsExceeded`] with the offending totals.
pub fn within_unit_load(student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    let enrolled = student.total_units();
    let units = candidate.subject().units();
    let max = student.config().max_units();
    if enrolled + units > max {
        return Err(EnlistError::MaxUnitsExceeded {
            enrolled,
            candidate: units,
            max,
        });
    }
    Ok(())
}

/// The candidate's subject must be offered in the student's program.
///
/// # Errors
///
/// Returns [`EnlistError::SubjectNotInProgram`] naming subject and program.
pub fn subject_in_program(student: &Student, candidate: &Section) -> Result<(), EnlistError> {
    if student.program().contains(candidate.subject()) {
        Ok(())
    } else {
        Err(EnlistError::SubjectNotInProgram {
            subject: candidate.subject().code().clone(),
            program: student.program().name().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use non_empty_string::NonEmptyString;

    use crate::domain::{
        program::DegreeProgram,
        room::Room,
        schedule::{Days, Period, Schedule},
        subject::Subject,
    };

    use super::*;

    fn schedule(days: Days, start: u16, end: u16) -> Schedule {
        Schedule::new(days, Period::new(start, end).unwrap())
    }

    fn section(code: &str, sched: Schedule, capacity: u32, subject: Subject) -> Section {
        Section::new(
            code.parse().unwrap(),
            sched,
            Room::new(format!("R{code}").parse().unwrap(), capacity),
            subject,
        )
    }

    fn program(subjects: &[&Subject]) -> DegreeProgram {
        DegreeProgram::new(
            NonEmptyString::new("CCS".to_string()).unwrap(),
            subjects.iter().map(|&s| s.clone()),
        )
    }

    fn subject(code: &str, units: u32) -> Subject {
        Subject::new(code.parse().unwrap(), units)
    }

    #[test]
    fn schedule_rule_names_the_enlisted_section() {
        let prog1 = subject("CCPROG1", 3);
        let icomp = subject("CCICOMP", 3);
        let held = section("A", schedule(Days::Mth, 830, 1200), 2, prog1.clone());
        let candidate = section("B", schedule(Days::Mth, 1030, 1300), 2, icomp.clone());

        let mut student = Student::new(
            NonZeroU32::new(1).unwrap(),
            program(&[&prog1, &icomp]),
        );
        student.enlist(&held).unwrap();

        let error = no_schedule_conflict(&student, &candidate).unwrap_err();
        assert_eq!(
            error,
            EnlistError::ScheduleConflict {
                existing: "A".parse().unwrap(),
                candidate: "B".parse().unwrap(),
            }
        );
    }

    #[test]
    fn seat_rule_reports_full_and_unassigned_rooms() {
        let math = subject("MTH101A", 3);
        let full = section("A", schedule(Days::Mth, 830, 1000), 0, math.clone());
        let student = Student::new(NonZeroU32::new(1).unwrap(), program(&[&math]));

        assert!(matches!(
            seat_available(&student, &full),
            Err(EnlistError::CapacityReached { capacity: 0, .. })
        ));

        full.clear_room();
        assert!(matches!(
            seat_available(&student, &full),
            Err(EnlistError::RoomUnassigned { .. })
        ));
    }

    #[test]
    fn duplicate_rule_matches_by_subject_identity() {
        let prog1 = subject("CCPROG1", 3);
        let held = section("A", schedule(Days::Mth, 830, 1000), 2, prog1.clone());
        let candidate = section("B", schedule(Days::Tf, 830, 1000), 2, prog1.clone());

        let mut student = Student::new(NonZeroU32::new(1).unwrap(), program(&[&prog1]));
        student.enlist(&held).unwrap();

        assert_eq!(
            no_duplicate_subject(&student, &candidate).unwrap_err(),
            EnlistError::DuplicateSubject {
                existing: "A".parse().unwrap(),
                subject: "CCPROG1".parse().unwrap(),
            }
        );
    }

    #[test]
    fn prerequisite_rule_lists_what_is_missing() {
        let prog1 = subject("CCPROG1", 3);
        let prog2 = Subject::with_prerequisites(
            "CCPROG2".parse().unwrap(),
            3,
            [prog1.clone()],
            false,
        );
        let candidate = section("A", schedule(Days::Mth, 830, 1000), 2, prog2.clone());
        let mut student = Student::new(NonZeroU32::new(1).unwrap(), program(&[&prog2]));

        assert_eq!(
            prerequisites_taken(&student, &candidate).unwrap_err(),
            EnlistError::PrerequisiteNotMet {
                subject: "CCPROG2".parse().unwrap(),
                missing: vec!["CCPROG1".parse().unwrap()],
            }
        );

        student.add_taken_subject(prog1);
        assert!(prerequisites_taken(&student, &candidate).is_ok());
    }

    #[test]
    fn unit_load_rule_uses_the_configured_ceiling() {
        let heavy = subject("CCPROG1", 22);
        let light = subject("CCICOMP", 3);
        let held = section("A", schedule(Days::Mth, 830, 1000), 2, heavy.clone());
        let candidate = section("B", schedule(Days::Ws, 830, 1000), 2, light.clone());

        let mut student = Student::new(
            NonZeroU32::new(1).unwrap(),
            program(&[&heavy, &light]),
        );
        student.enlist(&held).unwrap();

        assert_eq!(
            within_unit_load(&student, &candidate).unwrap_err(),
            EnlistError::MaxUnitsExceeded {
                enrolled: 22,
                candidate: 3,
                max: 24,
            }
        );
    }

    #[test]
    fn program_rule_names_subject_and_program() {
        let stray = subject("ABCDEFG", 3);
        let candidate = section("A", schedule(Days::Mth, 830, 1000), 2, stray);
        let student = Student::new(
            NonZeroU32::new(1).unwrap(),
            program(&[&subject("CCPROG1", 3)]),
        );

        assert_eq!(
            subject_in_program(&student, &candidate).unwrap_err(),
            EnlistError::SubjectNotInProgram {
                subject: "ABCDEFG".parse().unwrap(),
                program: "CCS".to_string(),
            }
        );
    }

    #[test]
    fn missing_prerequisites_are_sorted_in_the_message() {
        let error = EnlistError::PrerequisiteNotMet {
            subject: "STSWENG".parse().unwrap(),
            missing: vec!["CCPROG2".parse().unwrap(), "STDISCM".parse().unwrap()],
        };
        assert_eq!(
            error.to_string(),
            "subject STSWENG requires prerequisites not yet taken: CCPROG2, STDISCM"
        );
    }
}
