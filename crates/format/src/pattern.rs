//! Custom strftime pattern validation and rendering.

use std::fmt::Write as _;

use chrono::NaiveDate;
use chrono::format::StrftimeItems;

use crate::error::FormatError;

/// A validated strftime-style date pattern.
///
/// Validation renders a fixed reference date (2000-01-01) through the
/// pattern at construction time, so a stored `CustomPattern` is known to
/// handle plain calendar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPattern {
    pattern: String,
}

impl CustomPattern {
    /// Validates `pattern` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Pattern`] if the pattern fails to parse or
    /// cannot render a date-only value (e.g. it requires time-of-day
    /// fields).
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        let this = Self {
            pattern: pattern.to_owned(),
        };
        let reference =
            NaiveDate::from_ymd_opt(2000, 1, 1).expect("reference date is a valid calendar date");
        this.render(reference)?;
        Ok(this)
    }

    /// Returns the raw pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders `date` through this pattern.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Pattern`] if rendering fails. This cannot
    /// happen for patterns that passed [`CustomPattern::new`] unless the
    /// pattern depends on fields a plain date does not carry.
    pub fn render(&self, date: NaiveDate) -> Result<String, FormatError> {
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            date.format_with_items(StrftimeItems::new(&self.pattern))
        )
        .map_err(|_| FormatError::Pattern {
            pattern: self.pattern.clone(),
        })?;
        Ok(rendered)
    }
}
