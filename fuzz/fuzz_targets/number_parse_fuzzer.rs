//! Fuzz target for the numeric line parser
//!
//! # Invariants
//!
//! - Parsing MUST NOT panic on any UTF-8 line
//! - Accepted values MUST be finite
//! - Formatting an accepted value and parsing it again MUST return the same
//!   value
//! - Yes/no parsing accepts only single `y`/`n` characters

#![no_main]

use conprompt::{num_to_string_no_trailing_zeros, parse_number, parse_yes_no};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|line: &str| {
    if let Ok(value) = parse_number(line) {
        assert!(value.is_finite(), "accepted non-finite value from {line:?}");

        let text = num_to_string_no_trailing_zeros(value);
        assert_eq!(parse_number(&text), Ok(value), "{text:?} does not round-trip");
    }

    if let Some(answer) = parse_yes_no(line) {
        let expected = if answer { "y" } else { "n" };
        assert!(line.eq_ignore_ascii_case(expected));
    }
});
