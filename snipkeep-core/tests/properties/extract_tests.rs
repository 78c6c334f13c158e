//! Property-based tests for line-range extraction
//!
//! Extraction from a file must agree with slicing the file's lines in
//! memory, clip ranges that run past the end, and reject ranges that start
//! past the end.

use proptest::prelude::*;
use snipkeep_core::{extract_all, extract_lines, ExtractError};
use std::io::Write;
use tempfile::NamedTempFile;

// Strategy for generating a single line of source text (no line breaks)
fn arb_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _(){};=+.,:-]{1,40}".prop_map(|s| s)
}

// Strategy for generating the lines of a file
fn arb_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_line(), 1..30)
}

fn write_lines(lines: &[String], trailing_newline: bool) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let mut content = lines.join("\n");
    if trailing_newline {
        content.push('\n');
    }
    file.write_all(content.as_bytes()).unwrap();
    file
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: an in-bounds range returns exactly the lines start..=end
    #[test]
    fn extract_matches_slice(
        lines in arb_lines(),
        trailing in any::<bool>(),
        a in 0usize..30,
        b in 0usize..30,
    ) {
        let len = lines.len();
        let start = a % len + 1;
        let end = start + b % (len - start + 1);
        let file = write_lines(&lines, trailing);

        let code = extract_lines(file.path(), start as i64, end as i64).unwrap();

        prop_assert_eq!(code, lines[start - 1..end].join("\n"));
    }

    /// Property: an end past EOF is clipped to the last line
    #[test]
    fn extract_clips_end(lines in arb_lines(), a in 0usize..30, extra in 1i64..1000) {
        let len = lines.len();
        let start = a % len + 1;
        let file = write_lines(&lines, true);

        let code = extract_lines(file.path(), start as i64, len as i64 + extra).unwrap();

        prop_assert_eq!(code, lines[start - 1..].join("\n"));
    }

    /// Property: a start past EOF reports the actual line count
    #[test]
    fn extract_start_past_eof_fails(lines in arb_lines(), past in 1i64..100, width in 0i64..10) {
        let len = lines.len() as i64;
        let file = write_lines(&lines, true);

        let err = extract_lines(file.path(), len + past, len + past + width).unwrap_err();

        prop_assert_eq!(
            err,
            ExtractError::InsufficientLines {
                actual: lines.len(),
                requested: (len + past) as usize,
            }
        );
    }

    /// Property: reversed or non-positive ranges are rejected before any I/O
    #[test]
    fn extract_invalid_range_fails(start in -50i64..50, back in 1i64..50) {
        let end = start - back;
        let err = extract_lines(std::path::Path::new("/nonexistent/snippet/source"), start, end)
            .unwrap_err();

        prop_assert_eq!(err, ExtractError::InvalidRange { start, end });
    }

    /// Property: extracting the whole file returns it byte for byte
    #[test]
    fn extract_all_is_verbatim(lines in arb_lines(), trailing in any::<bool>()) {
        let file = write_lines(&lines, trailing);
        let expected = std::fs::read_to_string(file.path()).unwrap();

        prop_assert_eq!(extract_all(file.path()).unwrap(), expected);
    }
}
