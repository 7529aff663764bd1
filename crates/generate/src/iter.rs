//! Lazy iteration over calendar dates.

use tracing::debug;

use chronogen_calendar::{Date, days_in_month};

use crate::error::GeneratorError;
use crate::generator::DateGenerator;

/// Months of the year used when no month filter is configured.
const ALL_MONTHS: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Iterator over the calendar dates selected by a generator.
///
/// Walks years, then months, then days, honoring the configured direction
/// at every level. The effective day list is recomputed per (year, month)
/// so month lengths and leap years are always respected; a filtered day
/// beyond the current month's length is skipped, never an error.
pub(crate) struct DateIter<'a> {
    months: &'a [u8],
    days: Option<&'a [u8]>,
    reverse: bool,
    start_year: i32,
    end_year: i32,
    year: i32,
    month_pos: usize,
    day_pos: usize,
    current_days: Vec<u8>,
    exhausted: bool,
}

impl<'a> DateIter<'a> {
    pub(crate) fn new(generator: &'a DateGenerator) -> Self {
        let (start_year, end_year) = generator.year_range();
        let months: &[u8] = match generator.month_filter() {
            Some(filter) if !filter.is_empty() => filter,
            _ => &ALL_MONTHS,
        };
        let reverse = generator.reverse();
        let mut iter = Self {
            months,
            days: generator.day_filter(),
            reverse,
            start_year,
            end_year,
            year: if reverse { end_year } else { start_year },
            month_pos: 0,
            day_pos: 0,
            current_days: Vec::new(),
            exhausted: false,
        };
        iter.current_days = iter.effective_days();
        iter
    }

    /// Month at the current cursor, honoring direction.
    fn current_month(&self) -> u8 {
        if self.reverse {
            self.months[self.months.len() - 1 - self.month_pos]
        } else {
            self.months[self.month_pos]
        }
    }

    /// Day numbers for the current (year, month), in emission order.
    fn effective_days(&self) -> Vec<u8> {
        let month = self.current_month();
        let last_day =
            days_in_month(self.year, month).expect("month filters are validated to 1..=12");
        let mut days: Vec<u8> = match self.days {
            None => (1..=last_day).collect(),
            Some(filter) => filter.iter().copied().filter(|&d| d <= last_day).collect(),
        };
        if let Some(filter) = self.days {
            if days.len() < filter.len() {
                debug!(
                    year = self.year,
                    month,
                    last_day,
                    "skipping filtered days beyond month length"
                );
            }
        }
        if self.reverse {
            days.reverse();
        }
        days
    }

    /// Moves the cursor to the next (year, month), marking exhaustion at
    /// the end of the year range.
    fn advance_month(&mut self) {
        self.month_pos += 1;
        if self.month_pos == self.months.len() {
            self.month_pos = 0;
            let last_year = if self.reverse {
                self.year == self.start_year
            } else {
                self.year == self.end_year
            };
            if last_year {
                self.exhausted = true;
                return;
            }
            self.year += if self.reverse { -1 } else { 1 };
        }
        self.day_pos = 0;
        self.current_days = self.effective_days();
    }
}

impl Iterator for DateIter<'_> {
    type Item = Result<Date, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }
            if self.day_pos < self.current_days.len() {
                let day = self.current_days[self.day_pos];
                self.day_pos += 1;
                let month = self.current_month();
                return Some(Date::new(self.year, month, day).map_err(|_| {
                    GeneratorError::ImpossibleDate {
                        year: self.year,
                        month,
                        day,
                    }
                }));
            }
            self.advance_month();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;

    fn dates(config: GeneratorConfig) -> Vec<(i32, u8, u8)> {
        let generator = DateGenerator::new(config).unwrap();
        DateIter::new(&generator)
            .map(|item| {
                let date = item.unwrap();
                (date.year(), date.month(), date.day())
            })
            .collect()
    }

    #[test]
    fn leap_year_has_366_days() {
        let all = dates(GeneratorConfig::new(2024, 2024));
        assert_eq!(all.len(), 366);
        assert_eq!(all[0], (2024, 1, 1));
        assert_eq!(all[all.len() - 1], (2024, 12, 31));
    }

    #[test]
    fn common_year_has_365_days() {
        assert_eq!(dates(GeneratorConfig::new(2023, 2023)).len(), 365);
    }

    #[test]
    fn multi_year_ascending() {
        let all = dates(GeneratorConfig::new(2023, 2024));
        assert_eq!(all.len(), 365 + 366);
        assert_eq!(all[0], (2023, 1, 1));
        assert_eq!(all[364], (2023, 12, 31));
        assert_eq!(all[365], (2024, 1, 1));
    }

    #[test]
    fn reverse_descends_every_level() {
        let all = dates(GeneratorConfig::new(2023, 2024).with_reverse(true));
        assert_eq!(all[0], (2024, 12, 31));
        assert_eq!(all[all.len() - 1], (2023, 1, 1));
    }

    #[test]
    fn month_filter_limits_output() {
        let all = dates(GeneratorConfig::new(2023, 2023).with_months(vec![2]));
        assert_eq!(all.len(), 28);
        assert_eq!(all[0], (2023, 2, 1));
        assert_eq!(all[27], (2023, 2, 28));
    }

    #[test]
    fn day_filter_fixed_day_per_month() {
        let all = dates(
            GeneratorConfig::new(2024, 2024)
                .with_months(vec![1, 2, 3])
                .with_days(vec![1]),
        );
        assert_eq!(all, vec![(2024, 1, 1), (2024, 2, 1), (2024, 3, 1)]);
    }

    #[test]
    fn day_31_skipped_in_short_months() {
        let all = dates(
            GeneratorConfig::new(2023, 2023)
                .with_months(vec![1, 2, 4])
                .with_days(vec![31]),
        );
        // Only January has a day 31 among the filtered months.
        assert_eq!(all, vec![(2023, 1, 31)]);
    }

    #[test]
    fn feb_29_only_in_leap_years() {
        let all = dates(
            GeneratorConfig::new(2023, 2024)
                .with_months(vec![2])
                .with_days(vec![29]),
        );
        assert_eq!(all, vec![(2024, 2, 29)]);
    }

    #[test]
    fn reversed_filters_descend() {
        let all = dates(
            GeneratorConfig::new(2023, 2024)
                .with_months(vec![1, 2])
                .with_days(vec![1, 29, 31])
                .with_reverse(true),
        );
        assert_eq!(
            all,
            vec![
                (2024, 2, 29),
                (2024, 2, 1),
                (2024, 1, 31),
                (2024, 1, 29),
                (2024, 1, 1),
                (2023, 2, 1),
                (2023, 1, 31),
                (2023, 1, 29),
                (2023, 1, 1),
            ]
        );
    }

    #[test]
    fn empty_day_filter_yields_nothing() {
        assert!(dates(GeneratorConfig::new(2023, 2024).with_days(vec![])).is_empty());
    }

    #[test]
    fn empty_month_filter_means_all_months() {
        // An explicitly empty month list falls back to every month.
        let all = dates(GeneratorConfig::new(2023, 2023).with_months(vec![]));
        assert_eq!(all.len(), 365);
    }

    #[test]
    fn single_day_range() {
        let all = dates(
            GeneratorConfig::new(2024, 2024)
                .with_months(vec![2])
                .with_days(vec![29]),
        );
        assert_eq!(all, vec![(2024, 2, 29)]);
    }
}
