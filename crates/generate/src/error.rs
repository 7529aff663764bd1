//! Error types for the chronogen-generate crate.

use chronogen_format::FormatError;

/// Error type for all fallible operations in the chronogen-generate crate.
///
/// Every variant except [`GeneratorError::ImpossibleDate`] and
/// [`GeneratorError::Io`] describes an invalid configuration and is raised
/// eagerly at construction time, before any date is generated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    /// Returned when the configured year range is inverted.
    #[error("start_year must be less than or equal to end_year (got {start}..={end})")]
    YearRange {
        /// The configured starting year.
        start: i32,
        /// The configured ending year.
        end: i32,
    },

    /// Returned when a months/days filter value is outside its valid range.
    #[error("{field} must be between 1 and {max} (got {value})")]
    FilterValue {
        /// Name of the offending filter (`months` or `days`).
        field: &'static str,
        /// The out-of-range value that was provided.
        value: u32,
        /// The maximum valid value for the filter.
        max: u32,
    },

    /// Returned when the case transform is neither `lower` nor `upper`.
    #[error("case must be 'lower' or 'upper' when provided (got {value:?})")]
    UnknownCase {
        /// The unrecognized case value.
        value: String,
    },

    /// Returned when the symbolic template or custom pattern is invalid.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Internal consistency error: iteration produced a (year, month, day)
    /// triple that does not exist in the calendar. Indicates a defect in
    /// the iteration or filtering logic, not a configuration mistake.
    #[error("internal error: impossible calendar date {year}-{month:02}-{day:02}")]
    ImpossibleDate {
        /// Year of the impossible triple.
        year: i32,
        /// Month of the impossible triple.
        month: u8,
        /// Day of the impossible triple.
        day: u8,
    },

    /// Wraps an I/O failure while writing generated values.
    #[error("write failed: {reason}")]
    Io {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

impl GeneratorError {
    /// Returns `true` for user-facing configuration errors, as opposed to
    /// internal defects or environment failures.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::YearRange { .. }
                | Self::FilterValue { .. }
                | Self::UnknownCase { .. }
                | Self::Format(_)
        )
    }
}
