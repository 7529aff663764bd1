//! Raw generator configuration.

use std::str::FromStr;

use crate::error::GeneratorError;

/// Default symbolic template when none is configured.
pub const DEFAULT_FORMAT: &str = "YYYYMMDD";

/// Case transform applied to rendered date strings.
///
/// The transform touches the rendered date portion only; prefix and suffix
/// are attached afterwards, unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Lowercase the rendered value.
    Lower,
    /// Uppercase the rendered value.
    Upper,
}

impl Case {
    /// Applies this transform to `text`.
    pub(crate) fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
        }
    }
}

impl FromStr for Case {
    type Err = GeneratorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            _ => Err(GeneratorError::UnknownCase {
                value: value.to_owned(),
            }),
        }
    }
}

/// Raw configuration for a [`DateGenerator`](crate::DateGenerator).
///
/// Carries caller input as provided; validation and normalization happen
/// once, in [`DateGenerator::new`](crate::DateGenerator::new). Setters
/// follow the builder convention and may be chained.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Starting year, inclusive.
    pub start_year: i32,
    /// Ending year, inclusive.
    pub end_year: i32,
    /// Symbolic template or preset name; empty falls back to the default.
    pub format: String,
    /// Separator between symbolic fields (ignored for custom patterns).
    pub separator: String,
    /// Optional strftime pattern overriding the symbolic template.
    pub custom_pattern: Option<String>,
    /// Optional month filter, valid values 1..=12.
    pub months: Option<Vec<u32>>,
    /// Optional day filter, valid values 1..=31.
    pub days: Option<Vec<u32>>,
    /// Prefix prepended to every rendered value.
    pub prefix: String,
    /// Suffix appended to every rendered value.
    pub suffix: String,
    /// Optional case transform name (`lower` or `upper`).
    pub case: Option<String>,
    /// Iterate from `end_year` down to `start_year` when set.
    pub reverse: bool,
}

impl GeneratorConfig {
    /// Creates a configuration for the inclusive year range with defaults
    /// for everything else.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        Self {
            start_year,
            end_year,
            format: DEFAULT_FORMAT.to_string(),
            separator: String::new(),
            custom_pattern: None,
            months: None,
            days: None,
            prefix: String::new(),
            suffix: String::new(),
            case: None,
            reverse: false,
        }
    }

    /// Sets the symbolic template or preset name.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the separator between symbolic fields.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets a custom strftime pattern overriding the symbolic template.
    pub fn with_custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_pattern = Some(pattern.into());
        self
    }

    /// Restricts generation to the given months.
    pub fn with_months(mut self, months: Vec<u32>) -> Self {
        self.months = Some(months);
        self
    }

    /// Restricts generation to the given days of the month.
    pub fn with_days(mut self, days: Vec<u32>) -> Self {
        self.days = Some(days);
        self
    }

    /// Sets the prefix prepended to every value.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the suffix appended to every value.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the case transform name.
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    /// Sets the iteration direction.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
