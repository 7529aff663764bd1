use std::path::PathBuf;

use clap::Parser;

use chronogen_generate::{DEFAULT_FORMAT, LineEnding};

/// Chronogen date-based wordlist generator.
#[derive(Parser)]
#[command(
    name = "chronogen",
    version,
    about = "Generate date-based wordlists for password auditing and automation",
    after_help = "Example usage:\n  \
                  chronogen --start 2000 --end 2001 --format YYYYMMDD\n  \
                  chronogen -s 1990 -e 1999 -f DDMMYY -S . -r\n  \
                  chronogen --list-formats"
)]
pub struct Cli {
    /// Starting year (inclusive).
    #[arg(
        short = 's',
        long,
        required_unless_present = "list_formats",
        allow_negative_numbers = true
    )]
    pub start: Option<i32>,

    /// Ending year (inclusive).
    #[arg(
        short = 'e',
        long,
        required_unless_present = "list_formats",
        allow_negative_numbers = true
    )]
    pub end: Option<i32>,

    /// Format template using contiguous Y, M, and D groups (e.g.
    /// 'YYYYMMDD', 'DDMMYY'), or a preset name (e.g. 'ymd').
    #[arg(short = 'f', long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// String inserted between date parts (ignored for custom patterns).
    #[arg(short = 'S', long, default_value = "")]
    pub separator: String,

    /// Custom strftime pattern overriding the format template (e.g. '%d%b%Y').
    #[arg(short = 'p', long = "pattern", value_name = "PATTERN")]
    pub custom_pattern: Option<String>,

    /// Restrict generation to specific months (1-12).
    #[arg(short = 'm', long, num_args = 1.., value_name = "MONTH")]
    pub months: Option<Vec<u32>>,

    /// Restrict generation to specific days of the month (1-31).
    #[arg(short = 'd', long, num_args = 1.., value_name = "DAY")]
    pub days: Option<Vec<u32>>,

    /// Prefix prepended to every value.
    #[arg(short = 'P', long, default_value = "")]
    pub prefix: String,

    /// Suffix appended to every value.
    #[arg(short = 'X', long, default_value = "")]
    pub suffix: String,

    /// Apply lower or upper casing to the generated values.
    #[arg(short = 'c', long)]
    pub case: Option<String>,

    /// Generate dates in reverse chronological order.
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Optional file path where the values will be written.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Line ending when writing to a file (accepts 'lf', 'crlf', '\n', or '\r\n').
    #[arg(
        short = 'n',
        long,
        default_value = "lf",
        value_name = "STYLE",
        value_parser = parse_line_ending
    )]
    pub newline: LineEnding,

    /// Show suggested format templates and presets, then exit.
    #[arg(short = 'l', long)]
    pub list_formats: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Clap value parser for the `--newline` flag.
fn parse_line_ending(value: &str) -> Result<LineEnding, String> {
    LineEnding::parse(value)
        .ok_or_else(|| "newline must be one of 'lf', 'crlf', '\\n', or '\\r\\n'".to_string())
}
