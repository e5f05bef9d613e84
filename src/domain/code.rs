use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;

/// A validated identifier containing only ASCII letters and digits.
///
/// Used for room names, subject codes, and section codes to ensure they
/// conform to the required format.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CodeString(NonEmptyString);

impl CodeString {
    /// Creates a new `CodeString` from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCodeError` if the string is empty or contains
    /// characters other than ASCII letters and digits.
    pub fn new(s: String) -> Result<Self, InvalidCodeError> {
        let non_empty = NonEmptyString::new(s.clone()).map_err(|_| InvalidCodeError(s.clone()))?;

        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidCodeError(s));
        }

        Ok(Self(non_empty))
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::hash::Hash for CodeString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.as_str().hash(state);
    }
}

impl TryFrom<String> for CodeString {
    type Error = InvalidCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CodeString {
    type Error = InvalidCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.to_string())
    }
}

impl AsRef<str> for CodeString {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for CodeString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for CodeString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CodeString {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

/// Error returned when a string is not a valid identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid code '{0}': must be non-blank and contain only ASCII letters and digits")]
pub struct InvalidCodeError(String);
