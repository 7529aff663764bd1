//! Symbolic template compilation.

use crate::error::FormatError;
use crate::token::FieldToken;

/// Compiles a symbolic date template into ordered field tokens.
///
/// Accepted characters are `Y`, `M`, and `D` (case-insensitive), grouped
/// contiguously:
///
/// * at most one run for each letter;
/// * `Y` run length must be 2 (short year) or 4 (full year);
/// * `M` and `D` runs must be exactly length 2;
/// * any run order is accepted (`DDMMYYYY`, `MMYYYY`, `YYMMDD`, ...).
///
/// Tokens are returned in the order the runs appear in the template.
///
/// # Errors
///
/// Returns the matching [`FormatError`] variant for an empty template, a
/// character outside {Y, M, D}, a letter split across runs, or a run of
/// invalid length.
pub fn compile(spec: &str) -> Result<Vec<FieldToken>, FormatError> {
    if spec.is_empty() {
        return Err(FormatError::Empty);
    }
    let text = spec.trim().to_uppercase();
    for ch in text.chars() {
        if !matches!(ch, 'Y' | 'M' | 'D') {
            return Err(FormatError::InvalidChar { found: ch });
        }
    }

    // Group maximal runs of identical characters with a single scan.
    let mut runs: Vec<(char, usize)> = Vec::new();
    for ch in text.chars() {
        match runs.last_mut() {
            Some((current, len)) if *current == ch => *len += 1,
            _ => runs.push((ch, 1)),
        }
    }

    let mut tokens = Vec::with_capacity(runs.len());
    let mut seen_year = false;
    let mut seen_month = false;
    let mut seen_day = false;
    for (letter, len) in runs {
        match letter {
            'Y' => {
                if seen_year {
                    return Err(FormatError::Repeated { letter: 'Y' });
                }
                seen_year = true;
                tokens.push(match len {
                    4 => FieldToken::FullYear,
                    2 => FieldToken::ShortYear,
                    _ => return Err(FormatError::YearRun { len }),
                });
            }
            'M' => {
                if seen_month {
                    return Err(FormatError::Repeated { letter: 'M' });
                }
                seen_month = true;
                if len != 2 {
                    return Err(FormatError::MonthRun { len });
                }
                tokens.push(FieldToken::Month);
            }
            'D' => {
                if seen_day {
                    return Err(FormatError::Repeated { letter: 'D' });
                }
                seen_day = true;
                if len != 2 {
                    return Err(FormatError::DayRun { len });
                }
                tokens.push(FieldToken::Day);
            }
            other => return Err(FormatError::InvalidChar { found: other }),
        }
    }

    if tokens.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::FieldToken::{Day, FullYear, Month, ShortYear};

    #[test]
    fn default_iso_order() {
        assert_eq!(compile("YYYYMMDD").unwrap(), vec![FullYear, Month, Day]);
    }

    #[test]
    fn day_first_order_preserved() {
        assert_eq!(compile("DDMMYYYY").unwrap(), vec![Day, Month, FullYear]);
    }

    #[test]
    fn short_year() {
        assert_eq!(compile("DDMMYY").unwrap(), vec![Day, Month, ShortYear]);
        assert_eq!(compile("YYMMDD").unwrap(), vec![ShortYear, Month, Day]);
    }

    #[test]
    fn partial_components() {
        assert_eq!(compile("MMDD").unwrap(), vec![Month, Day]);
        assert_eq!(compile("YYYYMM").unwrap(), vec![FullYear, Month]);
        assert_eq!(compile("MM").unwrap(), vec![Month]);
        assert_eq!(compile("DD").unwrap(), vec![Day]);
    }

    #[test]
    fn lowercase_and_whitespace_accepted() {
        assert_eq!(compile("yyyymmdd").unwrap(), vec![FullYear, Month, Day]);
        assert_eq!(compile("  MMDD  ").unwrap(), vec![Month, Day]);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(compile("").unwrap_err(), FormatError::Empty);
        assert_eq!(compile("   ").unwrap_err(), FormatError::Empty);
    }

    #[test]
    fn invalid_character_rejected() {
        assert_eq!(
            compile("QQ").unwrap_err(),
            FormatError::InvalidChar { found: 'Q' }
        );
        assert_eq!(
            compile("YYYY-MM").unwrap_err(),
            FormatError::InvalidChar { found: '-' }
        );
    }

    #[test]
    fn bad_year_run_rejected() {
        assert_eq!(compile("YYYYY").unwrap_err(), FormatError::YearRun { len: 5 });
        assert_eq!(compile("Y").unwrap_err(), FormatError::YearRun { len: 1 });
        assert_eq!(compile("YYY").unwrap_err(), FormatError::YearRun { len: 3 });
    }

    #[test]
    fn bad_month_run_rejected() {
        assert_eq!(compile("MMM").unwrap_err(), FormatError::MonthRun { len: 3 });
        assert_eq!(compile("M").unwrap_err(), FormatError::MonthRun { len: 1 });
    }

    #[test]
    fn bad_day_run_rejected() {
        assert_eq!(compile("DDD").unwrap_err(), FormatError::DayRun { len: 3 });
        assert_eq!(compile("D").unwrap_err(), FormatError::DayRun { len: 1 });
    }

    #[test]
    fn non_contiguous_group_rejected() {
        assert_eq!(
            compile("YMDY").unwrap_err(),
            FormatError::YearRun { len: 1 }
        );
        assert_eq!(
            compile("YYMMDDYY").unwrap_err(),
            FormatError::Repeated { letter: 'Y' }
        );
        assert_eq!(
            compile("DDMMDD").unwrap_err(),
            FormatError::Repeated { letter: 'D' }
        );
    }
}
