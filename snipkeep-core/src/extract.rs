//! Line-range extraction from source files
//!
//! Selects an inclusive, 1-based range of lines from a text file. A range
//! whose start lies past the end of the file is an error, while an end past
//! the last line is clipped to the end of the file.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{ExtractError, ExtractResult};

/// An inclusive, 1-based range of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Creates a validated line range
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidRange` if `start < 1` or `end < start`.
    pub fn new(start: i64, end: i64) -> ExtractResult<Self> {
        if start < 1 || end < start {
            return Err(ExtractError::InvalidRange { start, end });
        }
        Ok(Self {
            start: start as usize,
            end: end as usize,
        })
    }

    /// A range covering a single line
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::InvalidRange` if `line < 1`.
    pub fn single(line: i64) -> ExtractResult<Self> {
        Self::new(line, line)
    }

    /// First line of the range (1-based)
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Last line of the range (1-based, inclusive)
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Selects the range from a buffered reader, stopping after the last
    /// requested line
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    fn select_from<R: BufRead>(&self, reader: R) -> io::Result<ExtractResult<String>> {
        let mut selected: Vec<String> = Vec::new();
        let mut count = 0usize;

        for line in reader.split(b'\n').take(self.end) {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            count += 1;
            if count >= self.start {
                selected.push(String::from_utf8_lossy(&line).into_owned());
            }
        }

        if count < self.start {
            return Ok(Err(ExtractError::InsufficientLines {
                actual: count,
                requested: self.start,
            }));
        }

        Ok(Ok(selected.join("\n")))
    }
}

/// Extracts lines `start..=end` (1-based) from the file at `path`
///
/// Lines are joined with `\n`; line terminators (`\n` or `\r\n`) are not
/// kept. An `end` beyond the last line is clipped. Invalid UTF-8 is replaced
/// with U+FFFD rather than rejected.
///
/// # Errors
///
/// - `ExtractError::InvalidRange` if the range is invalid. The file is not opened.
/// - `ExtractError::InsufficientLines` if the file has fewer than `start` lines.
/// - `ExtractError::Io` if the file cannot be opened or read.
pub fn extract_lines(path: &Path, start: i64, end: i64) -> ExtractResult<String> {
    let range = LineRange::new(start, end)?;
    extract_range(path, range)
}

/// Extracts an already validated range from the file at `path`
///
/// # Errors
///
/// See [`extract_lines`].
pub fn extract_range(path: &Path, range: LineRange) -> ExtractResult<String> {
    let file = File::open(path).map_err(|e| io_error(path, &e))?;
    let code = range
        .select_from(BufReader::new(file))
        .map_err(|e| io_error(path, &e))??;

    tracing::debug!(
        path = %path.display(),
        start = range.start,
        end = range.end,
        bytes = code.len(),
        "Extracted line range"
    );
    Ok(code)
}

/// Reads the entire file at `path` verbatim
///
/// Invalid UTF-8 is replaced with U+FFFD.
///
/// # Errors
///
/// Returns `ExtractError::Io` if the file cannot be read.
pub fn extract_all(path: &Path) -> ExtractResult<String> {
    let bytes = fs::read(path).map_err(|e| io_error(path, &e))?;
    let code = String::from_utf8_lossy(&bytes).into_owned();
    tracing::debug!(path = %path.display(), bytes = code.len(), "Extracted whole file");
    Ok(code)
}

fn io_error(path: &Path, err: &io::Error) -> ExtractError {
    ExtractError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
