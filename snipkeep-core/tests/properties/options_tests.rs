//! Property-based tests for save option validation

use proptest::prelude::*;
use snipkeep_core::{LineRange, LineSelection, OptionsError, SaveOptions};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: any valid numeric range parses to the same range
    #[test]
    fn valid_numbers_parse(start in 1i64..10_000, width in 0i64..10_000) {
        let end = start + width;
        let opts = SaveOptions::parse(
            "tag",
            "file.rs",
            Some(start.to_string().as_str()),
            Some(end.to_string().as_str()),
        )
        .unwrap();

        prop_assert_eq!(
            opts.selection,
            LineSelection::Range(LineRange::new(start, end).unwrap())
        );
    }

    /// Property: a lone start line selects exactly that line
    #[test]
    fn start_only_is_single_line(start in 1i64..10_000) {
        let opts = SaveOptions::parse("tag", "file.rs", Some(start.to_string().as_str()), None).unwrap();

        prop_assert_eq!(
            opts.selection,
            LineSelection::Range(LineRange::single(start).unwrap())
        );
    }

    /// Property: non-numeric start lines are reported with their raw value
    #[test]
    fn non_numeric_start_rejected(value in "[a-zA-Z][a-zA-Z0-9]{0,8}") {
        let err = SaveOptions::parse("tag", "file.rs", Some(value.as_str()), None).unwrap_err();

        prop_assert_eq!(err, OptionsError::InvalidLineNumber { field: "start", value });
    }
}
