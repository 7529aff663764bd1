//! # chronogen-format
//!
//! Compiles symbolic date templates (`DDMMYYYY`, `YYMM`, ...) into ordered
//! field tokens, validates and renders strftime-style custom patterns, and
//! defines the built-in named presets.
//!
//! A symbolic template is made of contiguous runs of `Y`, `M`, and `D`.
//! Each letter may appear in at most one run; `Y` runs are 2 (short year)
//! or 4 (full year) characters, `M` and `D` runs exactly 2. Token order
//! follows template order and is never normalized.

mod error;
mod pattern;
mod preset;
mod spec;
mod token;

pub use error::FormatError;
pub use pattern::CustomPattern;
pub use preset::{PRESETS, Preset, find_preset};
pub use spec::compile;
pub use token::FieldToken;
