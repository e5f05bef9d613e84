use std::{
    collections::HashSet,
    fmt,
    hash::{Hash, Hasher},
};

use crate::domain::code::CodeString;

/// A subject in the university catalog.
///
/// Carries its unit count, whether it is a laboratory subject, and the set
/// of subjects that must have been taken before it. Identity and equality
/// are by code alone; two `Subject` values with the same code are the same
/// subject no matter what else differs.
///
/// Prerequisites are direct membership only: they are not traversed
/// transitively, and nothing prevents a catalog from containing cyclic
/// prerequisite declarations.
#[derive(Debug, Clone)]
pub struct Subject {
    code: CodeString,
    units: u32,
    is_lab: bool,
    prerequisites: HashSet<Self>,
}

impl Subject {
    /// Creates a non-laboratory subject with no prerequisites.
    #[must_use]
    pub fn new(code: CodeString, units: u32) -> Self {
        Self::with_prerequisites(code, units, [], false)
    }

    /// Creates a laboratory subject with no prerequisites.
    #[must_use]
    pub fn lab(code: CodeString, units: u32) -> Self {
        Self::with_prerequisites(code, units, [], true)
    }

    /// Creates a subject with the given prerequisites.
    #[must_use]
    pub fn with_prerequisites(
        code: CodeString,
        units: u32,
        prerequisites: impl IntoIterator<Item = Self>,
        is_lab: bool,
    ) -> Self {
        Self {
            code,
            units,
            is_lab,
            prerequisites: prerequisites.into_iter().collect(),
        }
    }

    /// The subject's code.
    #[must_use]
    pub const fn code(&self) -> &CodeString {
        &self.code
    }

    /// The subject's unit count.
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.units
    }

    /// Whether this is a laboratory subject.
    #[must_use]
    pub const fn is_lab(&self) -> bool {
        self.is_lab
    }

    /// Returns an iterator over the directly-declared prerequisites.
    pub fn prerequisites(&self) -> impl Iterator<Item = &Self> {
        self.prerequisites.iter()
    }
}

impl PartialEq for Subject {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Subject {}

impl Hash for Subject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
