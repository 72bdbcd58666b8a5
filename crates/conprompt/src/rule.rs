//! Validation rules for numeric prompts.

use std::fmt;

use thiserror::Error;

use crate::{error::PromptError, format::num_to_string_no_trailing_zeros};

/// A predicate constraining acceptable numeric input.
///
/// All bounds are inclusive. Rules are stateless; the same rule can be
/// checked against any number of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationRule {
    /// Any number is accepted.
    Unrestricted,
    /// Accepts values greater than or equal to the bound.
    MinimumInclusive(f64),
    /// Accepts values less than or equal to the bound.
    MaximumInclusive(f64),
    /// Accepts values strictly greater than zero.
    Positive,
    /// Accepts values strictly less than zero.
    Negative,
    /// Accepts values within `[min, max]`.
    RangeInclusive {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl ValidationRule {
    /// Check a parsed value against this rule.
    pub fn check(&self, value: f64) -> Result<f64, ValidationFailed> {
        let passes = match *self {
            Self::Unrestricted => true,
            Self::MinimumInclusive(min) => value >= min,
            Self::MaximumInclusive(max) => value <= max,
            Self::Positive => value > 0.0,
            Self::Negative => value < 0.0,
            Self::RangeInclusive { min, max } => (min..=max).contains(&value),
        };

        if passes { Ok(value) } else { Err(ValidationFailed { rule: *self, value }) }
    }

    /// Reject rules that no value can satisfy.
    ///
    /// An empty range or a NaN bound would otherwise keep the retry loop
    /// asking forever.
    pub fn ensure_satisfiable(&self) -> Result<(), PromptError> {
        match *self {
            Self::RangeInclusive { min, max } if min > max || min.is_nan() || max.is_nan() => {
                Err(PromptError::EmptyRange { min, max })
            },
            Self::MinimumInclusive(bound) | Self::MaximumInclusive(bound) if bound.is_nan() => {
                Err(PromptError::InvalidBound { bound })
            },
            _ => Ok(()),
        }
    }

    /// Corrective text shown after a value fails this rule.
    pub fn corrective_message(&self) -> String {
        match *self {
            Self::Unrestricted => "Please input a number.".to_string(),
            Self::MinimumInclusive(min) => format!(
                "Please input a number greater than or equal to {}.",
                num_to_string_no_trailing_zeros(min)
            ),
            Self::MaximumInclusive(max) => format!(
                "Please input a number less than or equal to {}.",
                num_to_string_no_trailing_zeros(max)
            ),
            Self::Positive => "Please input a positive number.".to_string(),
            Self::Negative => "Please input a negative number.".to_string(),
            Self::RangeInclusive { min, max } => format!(
                "Please input a number between {} and {}.",
                num_to_string_no_trailing_zeros(min),
                num_to_string_no_trailing_zeros(max)
            ),
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Unrestricted => write!(f, "any number"),
            Self::MinimumInclusive(min) => write!(f, ">= {min}"),
            Self::MaximumInclusive(max) => write!(f, "<= {max}"),
            Self::Positive => write!(f, "> 0"),
            Self::Negative => write!(f, "< 0"),
            Self::RangeInclusive { min, max } => write!(f, "[{min}, {max}]"),
        }
    }
}

/// A parsed value that violated its rule.
///
/// Displays as the corrective message for the rule.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("{}", .rule.corrective_message())]
pub struct ValidationFailed {
    /// Rule that rejected the value
    pub rule: ValidationRule,
    /// The rejected value
    pub value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(ValidationRule::MinimumInclusive(5.0).check(5.0), Ok(5.0));
        assert_eq!(ValidationRule::MaximumInclusive(5.0).check(5.0), Ok(5.0));

        let range = ValidationRule::RangeInclusive { min: 1.0, max: 3.0 };
        assert_eq!(range.check(1.0), Ok(1.0));
        assert_eq!(range.check(3.0), Ok(3.0));
        assert!(range.check(0.999).is_err());
        assert!(range.check(3.001).is_err());
    }

    #[test]
    fn sign_rules_exclude_zero() {
        assert!(ValidationRule::Positive.check(0.0).is_err());
        assert!(ValidationRule::Negative.check(0.0).is_err());
        assert_eq!(ValidationRule::Positive.check(0.01), Ok(0.01));
        assert_eq!(ValidationRule::Negative.check(-0.01), Ok(-0.01));
    }

    #[test]
    fn unrestricted_accepts_everything_finite() {
        for value in [f64::MIN, -1.0, 0.0, 1.0, f64::MAX] {
            assert_eq!(ValidationRule::Unrestricted.check(value), Ok(value));
        }
    }

    #[test]
    fn failure_displays_corrective_message() {
        let err = ValidationRule::MinimumInclusive(2.50).check(1.0).unwrap_err();
        assert_eq!(err.to_string(), "Please input a number greater than or equal to 2.5.");

        let err = ValidationRule::MaximumInclusive(-3.0).check(0.0).unwrap_err();
        assert_eq!(err.to_string(), "Please input a number less than or equal to -3.");

        let err = ValidationRule::RangeInclusive { min: 1.0, max: 10.0 }.check(11.0).unwrap_err();
        assert_eq!(err.to_string(), "Please input a number between 1 and 10.");
        assert_eq!(err.value, 11.0);

        let err = ValidationRule::Positive.check(-1.0).unwrap_err();
        assert_eq!(err.to_string(), "Please input a positive number.");

        let err = ValidationRule::Negative.check(1.0).unwrap_err();
        assert_eq!(err.to_string(), "Please input a negative number.");
    }

    #[test]
    fn inverted_range_is_unsatisfiable() {
        let rule = ValidationRule::RangeInclusive { min: 4.0, max: 2.0 };
        assert!(matches!(
            rule.ensure_satisfiable(),
            Err(PromptError::EmptyRange { min, max }) if min == 4.0 && max == 2.0
        ));

        let nan_bound = ValidationRule::RangeInclusive { min: f64::NAN, max: 2.0 };
        assert!(nan_bound.ensure_satisfiable().is_err());

        let point = ValidationRule::RangeInclusive { min: 2.0, max: 2.0 };
        assert!(point.ensure_satisfiable().is_ok());
        assert!(ValidationRule::Positive.ensure_satisfiable().is_ok());
    }

    #[test]
    fn nan_bound_is_unsatisfiable() {
        let rules = [ValidationRule::MinimumInclusive(f64::NAN), ValidationRule::MaximumInclusive(f64::NAN)];
        for rule in rules {
            assert!(matches!(
                rule.ensure_satisfiable(),
                Err(PromptError::InvalidBound { bound }) if bound.is_nan()
            ));
        }

        assert!(ValidationRule::MinimumInclusive(f64::INFINITY).ensure_satisfiable().is_ok());
        assert!(ValidationRule::MaximumInclusive(-1.0).ensure_satisfiable().is_ok());
    }

    #[test]
    fn displays_rule_for_logs() {
        assert_eq!(ValidationRule::RangeInclusive { min: 1.0, max: 2.5 }.to_string(), "[1, 2.5]");
        assert_eq!(ValidationRule::MinimumInclusive(0.0).to_string(), ">= 0");
    }
}
