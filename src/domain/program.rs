use std::{collections::HashSet, fmt};

use non_empty_string::NonEmptyString;

use crate::domain::subject::Subject;

/// A degree program: the named set of subjects its students may take.
///
/// Unlike the id-keyed entities, programs compare by their full content:
/// two programs are equal only when both the name and the subject set
/// match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeProgram {
    name: NonEmptyString,
    subjects: HashSet<Subject>,
}

impl DegreeProgram {
    /// Creates a program from a pre-validated name and its subjects.
    #[must_use]
    pub fn new(name: NonEmptyString, subjects: impl IntoIterator<Item = Subject>) -> Self {
        Self {
            name,
            subjects: subjects.into_iter().collect(),
        }
    }

    /// The program's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the program offers the given subject.
    #[must_use]
    pub fn contains(&self, subject: &Subject) -> bool {
        self.subjects.contains(subject)
    }
}

impl fmt::Display for DegreeProgram {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
