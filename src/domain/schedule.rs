use std::{fmt, str::FromStr};

/// The meeting-day patterns a section can be scheduled on.
///
/// Pairings are fixed by the academic calendar: Monday/Thursday,
/// Tuesday/Friday, Wednesday/Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
    /// Monday and Thursday.
    Mth,
    /// Tuesday and Friday.
    Tf,
    /// Wednesday and Saturday.
    Ws,
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Mth => "MTH",
            Self::Tf => "TF",
            Self::Ws => "WS",
        };
        f.write_str(name)
    }
}

impl FromStr for Days {
    type Err = ParseDaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MTH" => Ok(Self::Mth),
            "TF" => Ok(Self::Tf),
            "WS" => Ok(Self::Ws),
            other => Err(ParseDaysError(other.to_string())),
        }
    }
}

/// Error returned when a string is not a recognised day pattern.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown day pattern '{0}': expected MTH, TF, or WS")]
pub struct ParseDaysError(String);

/// A time interval within the teaching day.
///
/// Times are 24-hour clock values encoded as `HHMM` integers (e.g. `1430`
/// for 2:30pm). Both endpoints land on a 30-minute boundary and lie within
/// the teaching day; the end is strictly after the start. Immutable after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: u16,
    end: u16,
}

impl Period {
    /// Earliest time a period may start.
    pub const EARLIEST: u16 = 830;

    /// Latest time a period may end.
    pub const LATEST: u16 = 1730;

    /// Creates a period from `HHMM`-encoded start and end times.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPeriodError`] if either time is off the 30-minute
    /// grid or outside the teaching day, or if the end does not come after
    /// the start.
    pub const fn new(start: u16, end: u16) -> Result<Self, InvalidPeriodError> {
        if start % 100 != 0 && start % 100 != 30 {
            return Err(InvalidPeriodError::Misaligned(start));
        }
        if end % 100 != 0 && end % 100 != 30 {
            return Err(InvalidPeriodError::Misaligned(end));
        }
        if start < Self::EARLIEST || start > Self::LATEST {
            return Err(InvalidPeriodError::OutOfRange(start));
        }
        if end < Self::EARLIEST || end > Self::LATEST {
            return Err(InvalidPeriodError::OutOfRange(end));
        }
        if end <= start {
            return Err(InvalidPeriodError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `HHMM`-encoded start time.
    #[must_use]
    pub const fn start(self) -> u16 {
        self.start
    }

    /// The `HHMM`-encoded end time.
    #[must_use]
    pub const fn end(self) -> u16 {
        self.end
    }

    /// Whether two periods share any time.
    ///
    /// Touching endpoints do not count as overlap: a period ending at
    /// `1000` does not overlap one starting at `1000`.
    #[must_use]
    pub const fn overlaps(self, other: Self) -> bool {
        !(self.start >= other.end || other.start >= self.end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.start, self.end)
    }
}

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((start, end)) = s.split_once('-') else {
            return Err(ParsePeriodError::Syntax(s.to_string()));
        };
        let start = start
            .parse()
            .map_err(|_| ParsePeriodError::Syntax(s.to_string()))?;
        let end = end
            .parse()
            .map_err(|_| ParsePeriodError::Syntax(s.to_string()))?;
        Ok(Self::new(start, end)?)
    }
}

/// Errors that can occur when constructing a [`Period`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidPeriodError {
    /// A time does not land on a 30-minute boundary.
    #[error("time {0:04} does not land on a 30-minute boundary")]
    Misaligned(u16),

    /// A time falls outside the teaching day.
    #[error("time {0:04} is outside the teaching day 0830-1730")]
    OutOfRange(u16),

    /// The end time is not strictly after the start time.
    #[error("period must end after it starts, got {start:04}-{end:04}")]
    EndNotAfterStart {
        /// The offending start time.
        start: u16,
        /// The offending end time.
        end: u16,
    },
}

/// Errors that can occur when parsing a [`Period`] from a string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParsePeriodError {
    /// The string is not of the form `HHMM-HHMM`.
    #[error("invalid period '{0}': expected HHMM-HHMM")]
    Syntax(String),

    /// The times parse but do not form a valid period.
    #[error(transparent)]
    Invalid(#[from] InvalidPeriodError),
}

/// A weekly meeting slot: a day pattern plus a period.
///
/// Immutable, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Schedule {
    days: Days,
    period: Period,
}

impl Schedule {
    /// Creates a schedule from pre-validated parts.
    #[must_use]
    pub const fn new(days: Days, period: Period) -> Self {
        Self { days, period }
    }

    /// The day pattern.
    #[must_use]
    pub const fn days(self) -> Days {
        self.days
    }

    /// The time period.
    #[must_use]
    pub const fn period(self) -> Period {
        self.period
    }

    /// Whether two schedules claim the same time.
    ///
    /// Schedules on different day patterns never overlap regardless of
    /// their periods.
    #[must_use]
    pub fn overlaps(self, other: Self) -> bool {
        self.days == other.days && self.period.overlaps(other.period)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.days, self.period)
    }
}

impl FromStr for Schedule {
    type Err = ParseScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((days, period)) = s.split_once(' ') else {
            return Err(ParseScheduleError::Syntax(s.to_string()));
        };
        Ok(Self::new(days.parse()?, period.parse()?))
    }
}

/// Errors that can occur when parsing a [`Schedule`] from a string.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseScheduleError {
    /// The string is not of the form `DAYS HHMM-HHMM`.
    #[error("invalid schedule '{0}': expected DAYS HHMM-HHMM")]
    Syntax(String),

    /// The day pattern is not recognised.
    #[error(transparent)]
    Days(#[from] ParseDaysError),

    /// The period component is malformed.
    #[error(transparent)]
    Period(#[from] ParsePeriodError),
}
