//! Generator construction, normalization, and rendering.

use chrono::NaiveDate;
use tracing::debug;

use chronogen_calendar::Date;
use chronogen_format::{CustomPattern, FieldToken, compile, find_preset};

use crate::config::{Case, DEFAULT_FORMAT, GeneratorConfig};
use crate::error::GeneratorError;
use crate::iter::DateIter;

/// How each emitted date is turned into a string.
#[derive(Debug, Clone)]
enum Renderer {
    /// Compiled symbolic template fields joined with a separator.
    Tokens {
        tokens: Vec<FieldToken>,
        separator: String,
    },
    /// Validated strftime pattern.
    Pattern(CustomPattern),
}

/// Generates formatted date strings for wordlists and automation scripts.
///
/// Holds the validated, normalized form of a [`GeneratorConfig`]. All
/// validation happens in [`DateGenerator::new`], before any date is
/// produced; each [`DateGenerator::generate`] call then hands out an
/// independent lazy sequence over the same immutable state.
#[derive(Debug, Clone)]
pub struct DateGenerator {
    start_year: i32,
    end_year: i32,
    renderer: Renderer,
    months: Option<Vec<u8>>,
    days: Option<Vec<u8>>,
    prefix: String,
    suffix: String,
    case: Option<Case>,
    reverse: bool,
}

impl DateGenerator {
    /// Validates and normalizes `config` into a generator.
    ///
    /// Month and day filters are deduplicated and stored sorted ascending;
    /// direction is applied at iteration time only. The symbolic template
    /// (or preset name) is compiled eagerly, a custom pattern is validated
    /// eagerly, so construction fails fast instead of failing mid-stream.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::YearRange`] for an inverted year range,
    /// [`GeneratorError::FilterValue`] for filter values outside 1..=12 /
    /// 1..=31, [`GeneratorError::UnknownCase`] for an unrecognized case
    /// name, or [`GeneratorError::Format`] for an invalid template or
    /// pattern.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.start_year > config.end_year {
            return Err(GeneratorError::YearRange {
                start: config.start_year,
                end: config.end_year,
            });
        }
        let months = normalize_filter(config.months, "months", 12)?;
        let days = normalize_filter(config.days, "days", 31)?;
        let case = match &config.case {
            Some(value) => Some(value.parse::<Case>()?),
            None => None,
        };

        let custom_pattern = config.custom_pattern.filter(|p| !p.is_empty());
        let renderer = match custom_pattern {
            Some(pattern) => Renderer::Pattern(CustomPattern::new(&pattern)?),
            None => {
                let template = resolve_template(&config.format);
                let tokens = compile(&template)?;
                debug!(
                    template = %template,
                    n_tokens = tokens.len(),
                    "compiled format template"
                );
                Renderer::Tokens {
                    tokens,
                    separator: config.separator,
                }
            }
        };

        Ok(Self {
            start_year: config.start_year,
            end_year: config.end_year,
            renderer,
            months,
            days,
            prefix: config.prefix,
            suffix: config.suffix,
            case,
            reverse: config.reverse,
        })
    }

    /// Returns a fresh lazy sequence of formatted date strings.
    ///
    /// Sequences from separate calls are independent and identical. Every
    /// item is `Ok` unless iteration produces a date that fails calendar
    /// construction, which indicates an internal defect and is surfaced as
    /// [`GeneratorError::ImpossibleDate`] rather than skipped.
    pub fn generate(&self) -> impl Iterator<Item = Result<String, GeneratorError>> + '_ {
        DateIter::new(self).map(move |item| item.and_then(|date| self.render(date)))
    }

    /// Collects the full sequence into a vector.
    ///
    /// # Errors
    ///
    /// Propagates the first generation error, if any.
    pub fn generate_to_vec(&self) -> Result<Vec<String>, GeneratorError> {
        self.generate().collect()
    }

    pub(crate) fn year_range(&self) -> (i32, i32) {
        (self.start_year, self.end_year)
    }

    pub(crate) fn month_filter(&self) -> Option<&[u8]> {
        self.months.as_deref()
    }

    pub(crate) fn day_filter(&self) -> Option<&[u8]> {
        self.days.as_deref()
    }

    pub(crate) fn reverse(&self) -> bool {
        self.reverse
    }

    /// Renders one date: fields or pattern, then case, then affixes.
    fn render(&self, date: Date) -> Result<String, GeneratorError> {
        let value = match &self.renderer {
            Renderer::Tokens { tokens, separator } => {
                let fields: Vec<String> =
                    tokens.iter().map(|token| token.render(date)).collect();
                fields.join(separator)
            }
            Renderer::Pattern(pattern) => {
                let naive = NaiveDate::from_ymd_opt(
                    date.year(),
                    u32::from(date.month()),
                    u32::from(date.day()),
                )
                .ok_or(GeneratorError::ImpossibleDate {
                    year: date.year(),
                    month: date.month(),
                    day: date.day(),
                })?;
                pattern.render(naive)?
            }
        };
        let value = match self.case {
            Some(case) => case.apply(&value),
            None => value,
        };
        Ok(format!("{}{value}{}", self.prefix, self.suffix))
    }
}

/// Resolves the configured format string: empty falls back to the default
/// template, a known preset name expands to its template, anything else is
/// compiled as-is.
fn resolve_template(format: &str) -> String {
    let trimmed = format.trim();
    if trimmed.is_empty() {
        return DEFAULT_FORMAT.to_string();
    }
    match find_preset(trimmed) {
        Some(preset) => preset.template.to_string(),
        None => trimmed.to_string(),
    }
}

/// Validates filter values against 1..=`max`, then deduplicates and sorts
/// ascending. Always copies; never aliases caller storage.
fn normalize_filter(
    values: Option<Vec<u32>>,
    field: &'static str,
    max: u32,
) -> Result<Option<Vec<u8>>, GeneratorError> {
    let Some(values) = values else {
        return Ok(None);
    };
    let mut normalized = Vec::with_capacity(values.len());
    for value in values {
        if !(1..=max).contains(&value) {
            return Err(GeneratorError::FilterValue { field, value, max });
        }
        normalized.push(value as u8);
    }
    normalized.sort_unstable();
    normalized.dedup();
    Ok(Some(normalized))
}
