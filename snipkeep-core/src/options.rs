//! Validation of save requests
//!
//! `SaveOptions` turns the raw values given on the command line into a
//! validated request: a tag, a source file, and which lines to take from it.

use std::path::{Path, PathBuf};

use crate::error::{ExtractResult, OptionsError, OptionsResult};
use crate::extract::{self, LineRange};

/// Which part of the source file to save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSelection {
    /// The whole file, verbatim
    All,
    /// An inclusive line range
    Range(LineRange),
}

/// A validated request to save a snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOptions {
    /// Tag to store the snippet under
    pub tag: String,
    /// Source file to read from
    pub file: PathBuf,
    /// Lines to take from the source file
    pub selection: LineSelection,
}

impl SaveOptions {
    /// Parses and validates raw save options
    ///
    /// `start` and `end` are the raw line number strings. Without a start
    /// line the whole file is selected; without an end line only the start
    /// line is selected. `~` and environment variables in `file` are
    /// expanded.
    ///
    /// # Errors
    ///
    /// - `OptionsError::MissingTag` / `OptionsError::MissingFile` for blank values
    /// - `OptionsError::InvalidLineNumber` if a line number is not an integer,
    ///   or an end line is given without a start line
    /// - `OptionsError::Range` if the numbers do not form a valid range
    pub fn parse(
        tag: &str,
        file: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> OptionsResult<Self> {
        if tag.trim().is_empty() {
            return Err(OptionsError::MissingTag);
        }
        if file.trim().is_empty() {
            return Err(OptionsError::MissingFile);
        }

        let selection = match (blank_to_none(start), blank_to_none(end)) {
            (None, None) => LineSelection::All,
            (None, Some(_)) => {
                return Err(OptionsError::InvalidLineNumber {
                    field: "start",
                    value: String::new(),
                })
            }
            (Some(start), end) => {
                let start_line = parse_line("start", start)?;
                let end_line = end.map_or(Ok(start_line), |e| parse_line("end", e))?;
                LineSelection::Range(LineRange::new(start_line, end_line)?)
            }
        };

        Ok(Self {
            tag: tag.to_string(),
            file: expand_path(file),
            selection,
        })
    }

    /// Reads the selected code from the source file
    ///
    /// # Errors
    ///
    /// Returns an `ExtractError` if the file cannot be read or is shorter
    /// than the selected start line.
    pub fn extract(&self) -> ExtractResult<String> {
        match self.selection {
            LineSelection::All => extract::extract_all(&self.file),
            LineSelection::Range(range) => extract::extract_range(&self.file, range),
        }
    }

    /// Source file path
    pub fn file(&self) -> &Path {
        &self.file
    }
}

fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_line(field: &'static str, value: &str) -> OptionsResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| OptionsError::InvalidLineNumber {
            field,
            value: value.to_string(),
        })
}

/// Expands `~` and `$VAR` in a user supplied path, falling back to the
/// literal path when a variable is undefined
fn expand_path(raw: &str) -> PathBuf {
    shellexpand::full(raw).map_or_else(
        |_| PathBuf::from(raw),
        |expanded| PathBuf::from(expanded.as_ref()),
    )
}
