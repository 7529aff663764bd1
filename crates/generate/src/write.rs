//! Line-oriented output sinks for generated wordlists.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::GeneratorError;
use crate::generator::DateGenerator;

/// Line terminator appended after every written value, including the last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style `\n`.
    #[default]
    Lf,
    /// Windows-style `\r\n`.
    CrLf,
}

impl LineEnding {
    /// Returns the literal terminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Parses a CLI-style line-ending name.
    ///
    /// Accepts the literal terminators `"\n"` and `"\r\n"` plus the
    /// (case-insensitive) names `lf`, `crlf`, `\\n`, and `\\r\\n`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "\n" => Some(Self::Lf),
            "\r\n" => Some(Self::CrLf),
            _ => match value.trim().to_lowercase().as_str() {
                "lf" | "\\n" => Some(Self::Lf),
                "crlf" | "\\r\\n" => Some(Self::CrLf),
                _ => None,
            },
        }
    }
}

fn io_error(err: io::Error) -> GeneratorError {
    GeneratorError::Io {
        reason: err.to_string(),
    }
}

/// Writes every generated value to `sink`, one per line, and returns the
/// number of lines written.
///
/// # Errors
///
/// Propagates generation errors and wraps I/O failures as
/// [`GeneratorError::Io`].
pub fn write_lines<W: Write>(
    generator: &DateGenerator,
    mut sink: W,
    line_ending: LineEnding,
) -> Result<usize, GeneratorError> {
    let mut count = 0usize;
    for value in generator.generate() {
        let value = value?;
        sink.write_all(value.as_bytes()).map_err(io_error)?;
        sink.write_all(line_ending.as_str().as_bytes())
            .map_err(io_error)?;
        count += 1;
    }
    Ok(count)
}

/// Writes the generated wordlist to `path`, creating missing parent
/// directories, and returns the number of lines written.
///
/// # Errors
///
/// Propagates generation errors and wraps I/O failures as
/// [`GeneratorError::Io`].
pub fn write_to_path(
    generator: &DateGenerator,
    path: &Path,
    line_ending: LineEnding,
) -> Result<usize, GeneratorError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }
    let file = File::create(path).map_err(io_error)?;
    let mut sink = BufWriter::new(file);
    let count = write_lines(generator, &mut sink, line_ending)?;
    sink.flush().map_err(io_error)?;
    info!(path = %path.display(), lines = count, "wordlist written");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_literals() {
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn parse_names() {
        assert_eq!(LineEnding::parse("lf"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::parse("CRLF"), Some(LineEnding::CrLf));
        assert_eq!(LineEnding::parse("\\n"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::parse("\\r\\n"), Some(LineEnding::CrLf));
    }

    #[test]
    fn parse_literal_terminators() {
        assert_eq!(LineEnding::parse("\n"), Some(LineEnding::Lf));
        assert_eq!(LineEnding::parse("\r\n"), Some(LineEnding::CrLf));
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(LineEnding::parse("cr"), None);
        assert_eq!(LineEnding::parse(""), None);
    }

    #[test]
    fn default_is_lf() {
        assert_eq!(LineEnding::default(), LineEnding::Lf);
    }
}
