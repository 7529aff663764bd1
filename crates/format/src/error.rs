//! Error types for the chronogen-format crate.

/// Error type for all fallible operations in the chronogen-format crate.
///
/// This enum covers symbolic-template validation failures and custom
/// strftime patterns that fail to parse or render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Returned when the template is empty or compiles to no fields.
    #[error("format string must not be empty")]
    Empty,

    /// Returned when the template contains a character other than Y, M, or D.
    #[error("format may only contain Y, M, and D characters (found: {found:?})")]
    InvalidChar {
        /// The offending character.
        found: char,
    },

    /// Returned when a field letter appears in more than one run.
    #[error("{letter} appears multiple times; combine into a single group")]
    Repeated {
        /// The letter that appeared in separate runs.
        letter: char,
    },

    /// Returned when a Y run is neither `YY` nor `YYYY`.
    #[error("Y groups must be either 'YY' or 'YYYY' (got {len})")]
    YearRun {
        /// Length of the offending run.
        len: usize,
    },

    /// Returned when an M run is not exactly `MM`.
    #[error("M groups must be exactly 'MM' (got {len})")]
    MonthRun {
        /// Length of the offending run.
        len: usize,
    },

    /// Returned when a D run is not exactly `DD`.
    #[error("D groups must be exactly 'DD' (got {len})")]
    DayRun {
        /// Length of the offending run.
        len: usize,
    },

    /// Returned when a custom strftime pattern fails to parse or cannot
    /// render a plain calendar date.
    #[error("invalid custom pattern: {pattern:?}")]
    Pattern {
        /// The rejected pattern.
        pattern: String,
    },
}
