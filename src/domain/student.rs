use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
    num::NonZeroU32,
};

use tracing::{debug, instrument};

use crate::domain::{
    code::CodeString,
    config::Config,
    money::Money,
    program::DegreeProgram,
    rules::{self, EnlistError},
    section::Section,
    subject::Subject,
};

/// A registrant: the aggregate that enlistment operations are run against.
///
/// A student owns the set of sections they are enlisted in, the history of
/// subjects they have already taken, and the degree program that bounds
/// what they may take. Identity and equality are by student number alone.
#[derive(Debug, Clone)]
pub struct Student {
    number: NonZeroU32,
    sections: HashSet<Section>,
    taken: HashSet<Subject>,
    program: DegreeProgram,
    config: Config,
}

impl Student {
    /// Creates a student with no enlisted sections, using the default
    /// fee schedule and unit-load ceiling.
    #[must_use]
    pub fn new(number: NonZeroU32, program: DegreeProgram) -> Self {
        Self::with_config(number, program, Config::default())
    }

    /// Creates a student with no enlisted sections and an explicit
    /// configuration.
    #[must_use]
    pub fn with_config(number: NonZeroU32, program: DegreeProgram, config: Config) -> Self {
        Self {
            number,
            sections: HashSet::new(),
            taken: HashSet::new(),
            program,
            config,
        }
    }

    /// Creates a student already holding the given sections.
    ///
    /// Seat counters are taken as-is; this constructor records an existing
    /// enrollment state rather than performing new enlistments.
    #[must_use]
    pub fn new_with_sections(
        number: NonZeroU32,
        sections: impl IntoIterator<Item = Section>,
        program: DegreeProgram,
    ) -> Self {
        Self {
            number,
            sections: sections.into_iter().collect(),
            taken: HashSet::new(),
            program,
            config: Config::default(),
        }
    }

    /// The student's number.
    #[must_use]
    pub const fn number(&self) -> NonZeroU32 {
        self.number
    }

    /// The student's degree program.
    #[must_use]
    pub const fn program(&self) -> &DegreeProgram {
        &self.program
    }

    /// The fee schedule and unit-load configuration in effect.
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    /// Returns an iterator over the sections the student is enlisted in.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Whether the student is enlisted in the given section.
    #[must_use]
    pub fn is_enlisted_in(&self, section: &Section) -> bool {
        self.sections.contains(section)
    }

    /// The total units across all enlisted sections.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.sections
            .iter()
            .map(|section| section.subject().units())
            .sum()
    }

    /// Whether the subject is in the student's taken-subject history.
    #[must_use]
    pub fn has_taken(&self, subject: &Subject) -> bool {
        self.taken.contains(subject)
    }

    /// Records a subject as taken.
    ///
    /// Returns `true` if it was newly recorded, or `false` if it was
    /// already in the history.
    pub fn add_taken_subject(&mut self, subject: Subject) -> bool {
        self.taken.insert(subject)
    }

    /// Returns an iterator over the taken-subject history.
    pub fn taken_subjects(&self) -> impl Iterator<Item = &Subject> {
        self.taken.iter()
    }

    /// Enlists the student in a section.
    ///
    /// Runs the [ordered rule chain](rules::ENLISTMENT_RULES) against the
    /// candidate, then reserves a seat and records the section. The
    /// operation is all-or-nothing: on any failure, neither the student's
    /// enrollment nor the section's seat count has changed.
    ///
    /// # Errors
    ///
    /// Returns the [`EnlistError`] of the first violated rule, in rule
    /// order — so when several violations co-exist, the earliest rule in
    /// the chain decides which one is reported. The seat reservation
    /// itself can also fail with [`EnlistError::CapacityReached`] if a
    /// concurrent enlistment takes the last seat after the rule chain ran.
    #[instrument(skip_all, fields(student = %self.number, section = %section))]
    pub fn enlist(&mut self, section: &Section) -> Result<(), EnlistError> {
        for rule in rules::ENLISTMENT_RULES {
            if let Err(error) = rule(self, section) {
                debug!(%error, "enlistment rejected");
                return Err(error);
            }
        }
        if let Err(error) = section.try_add_seat() {
            debug!(%error, "enlistment rejected");
            return Err(error);
        }
        self.sections.insert(section.clone());
        debug!("enlistment accepted");
        Ok(())
    }

    /// Cancels an enlistment: releases the seat and forgets the section,
    /// together or not at all.
    ///
    /// # Errors
    ///
    /// Returns [`NotEnrolledError`] if the student is not enlisted in the
    /// section; nothing is mutated in that case.
    #[instrument(skip_all, fields(student = %self.number, section = %section))]
    pub fn cancel(&mut self, section: &Section) -> Result<(), NotEnrolledError> {
        if !self.sections.remove(section) {
            return Err(NotEnrolledError {
                student: self.number,
                section: section.code().clone(),
            });
        }
        section.release_seat();
        debug!("enlistment cancelled");
        Ok(())
    }

    /// Computes the tuition assessment for the current enrollment.
    ///
    /// An empty enrollment assesses to exactly `0.00`. Otherwise each
    /// enlisted section contributes its units at the per-unit price plus
    /// the laboratory fee when its subject is a lab; the miscellaneous fee
    /// is added once, and VAT is applied to the subtotal with
    /// round-half-to-even at centavo precision, exactly once.
    #[must_use]
    pub fn request_assessment(&self) -> Money {
        if self.sections.is_empty() {
            return Money::ZERO;
        }
        let unit_price = Money::from_pesos(i64::from(self.config.unit_price()));
        let lab_fee = Money::from_pesos(i64::from(self.config.lab_fee()));

        let mut subtotal = Money::ZERO;
        for section in &self.sections {
            subtotal += unit_price * section.subject().units();
            if section.subject().is_lab() {
                subtotal += lab_fee;
            }
        }
        subtotal += Money::from_pesos(i64::from(self.config.misc_fee()));
        subtotal.with_vat(self.config.vat_basis_points())
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "student #{}", self.number)
    }
}

/// Error returned when cancelling a section the student does not hold.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("student #{student} is not enlisted in section {section}")]
pub struct NotEnrolledError {
    /// The student who attempted the cancellation.
    pub student: NonZeroU32,
    /// The section the student does not hold.
    pub section: CodeString,
}
