//! Compiled field tokens and their rendering.

use chronogen_calendar::Date;

/// One compiled unit of a symbolic format template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldToken {
    /// 4-digit zero-padded year (`YYYY`).
    FullYear,
    /// 2-digit zero-padded year modulo 100 (`YY`).
    ShortYear,
    /// 2-digit zero-padded month (`MM`).
    Month,
    /// 2-digit zero-padded day (`DD`).
    Day,
}

impl FieldToken {
    /// Renders this token for `date`.
    pub fn render(self, date: Date) -> String {
        match self {
            Self::FullYear => format!("{:04}", date.year()),
            Self::ShortYear => format!("{:02}", date.year().rem_euclid(100)),
            Self::Month => format!("{:02}", date.month()),
            Self::Day => format!("{:02}", date.day()),
        }
    }
}
