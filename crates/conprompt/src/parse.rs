//! Parsing of raw input lines.

use thiserror::Error;

/// A line that could not be interpreted as the requested kind of answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not a finite decimal number.
    #[error("invalid number format: {input:?}")]
    InvalidFormat {
        /// The offending line, terminator removed
        input: String,
    },
}

/// Parse one line of input as a number.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, decimal
/// digits with an optional fraction, and exponent notation. Empty lines,
/// trailing garbage and non-finite values (`inf`, `NaN`, or magnitudes that
/// overflow) are rejected.
pub fn parse_number(line: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidFormat { input: line.to_string() };

    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Interpret a yes/no answer.
///
/// Only a single `y` or `n`, in either case, is accepted; the line is not
/// trimmed.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    if line.eq_ignore_ascii_case("y") {
        Some(true)
    } else if line.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

/// Remove one trailing line terminator (`\n` or `\r\n`).
pub(crate) fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_notation() {
        assert_eq!(parse_number("42"), Ok(42.0));
        assert_eq!(parse_number("-3.75"), Ok(-3.75));
        assert_eq!(parse_number("+0.5"), Ok(0.5));
        assert_eq!(parse_number(".25"), Ok(0.25));
        assert_eq!(parse_number("1e3"), Ok(1000.0));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_number("  7 "), Ok(7.0));
        assert_eq!(parse_number("\t-1\r"), Ok(-1.0));
    }

    #[test]
    fn rejects_non_numbers() {
        for line in ["", "   ", "abc", "12abc", "1.2.3", "1,5", "- 4", "0x10"] {
            assert_eq!(
                parse_number(line),
                Err(ParseError::InvalidFormat { input: line.to_string() }),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_number("inf").is_err());
        assert!(parse_number("-infinity").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("1e400").is_err());
    }

    #[test]
    fn yes_no_accepts_single_letters() {
        assert_eq!(parse_yes_no("y"), Some(true));
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("N"), Some(false));
    }

    #[test]
    fn yes_no_rejects_everything_else() {
        for line in ["yes", "no", "1", "", " y", "y ", "x"] {
            assert_eq!(parse_yes_no(line), None, "{line:?} should be rejected");
        }
    }

    #[test]
    fn strips_one_terminator() {
        let mut line = String::from("abc\r\n");
        strip_line_terminator(&mut line);
        assert_eq!(line, "abc");

        let mut line = String::from("abc\n\n");
        strip_line_terminator(&mut line);
        assert_eq!(line, "abc\n");

        let mut line = String::from("abc");
        strip_line_terminator(&mut line);
        assert_eq!(line, "abc");
    }
}
