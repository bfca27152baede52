// ============================================================================
// Decimal Validator
// Ordered fail-fast pipeline over digit-count and range checks
// ============================================================================

use super::result::ValidationResult;
use super::rules::ValidationRules;
use crate::numeric::BigDecimal;

/// Validates an arbitrary-precision decimal against a [`ValidationRules`]
/// rule set.
///
/// Checks run as an ordered pipeline that stops at the first failure:
/// presence, integer-digit count, fractional-digit count, upper bound,
/// lower bound. Exactly one failure message is ever produced per call.
///
/// The only configuration is `check_fractions` (default `true`), fixed at
/// construction. When disabled, the fractional-digit check is skipped AND
/// the input is truncated to its integer part before any other check runs.
///
/// `validate` is a pure function of its inputs; a single validator instance
/// may be shared freely across threads.
///
/// # Example
/// ```
/// use bigdecimal_validator::prelude::*;
///
/// let rules = ValidationRules::new()
///     .with_min_integer_digits(1)
///     .with_max_integer_digits(3)
///     .with_max_fractional_digits(2)
///     .with_min_value(0)
///     .with_max_value(150);
///
/// let value: BigDecimal = "124.2".parse().unwrap();
/// let result = DecimalValidator::new().validate(Some(&value), &rules);
/// assert!(result.is_valid());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecimalValidator {
    check_fractions: bool,
}

impl Default for DecimalValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalValidator {
    /// Validator with fractional checks enabled.
    pub const fn new() -> Self {
        Self {
            check_fractions: true,
        }
    }

    /// Validator that skips the fractional-digit check and truncates the
    /// input to its integer part (toward zero, never rounding) before the
    /// remaining checks run.
    pub const fn without_fraction_checks() -> Self {
        Self {
            check_fractions: false,
        }
    }

    /// Validate a decimal value against the given rules.
    ///
    /// `value` being `None` means the caller supplied no value; whether an
    /// absent value should bypass validation entirely is the caller's
    /// decision to make before reaching this function.
    pub fn validate(
        &self,
        value: Option<&BigDecimal>,
        rules: &ValidationRules,
    ) -> ValidationResult {
        let Some(value) = value else {
            return Self::fail("Cannot parse null value.".to_string());
        };

        // Fraction policy, then exponent normalization: both leave the value
        // with a well-defined nonnegative scale for digit counting.
        let value = if self.check_fractions {
            value.normalize_exponent()
        } else {
            value.trunc()
        };

        if let Some(message) = check_integer_digits(&value, rules) {
            return Self::fail(message);
        }

        if self.check_fractions {
            if let Some(message) = check_fractional_digits(&value, rules) {
                return Self::fail(message);
            }
        }

        if let Some(message) = check_upper_bound(&value, rules) {
            return Self::fail(message);
        }

        if let Some(message) = check_lower_bound(&value, rules) {
            return Self::fail(message);
        }

        ValidationResult::valid()
    }

    fn fail(message: String) -> ValidationResult {
        tracing::debug!("decimal validation failed: {}", message);
        ValidationResult::failure(message)
    }
}

// ============================================================================
// Checks
// Each returns the failure message for its rule, or None if it passes
// ============================================================================

/// Count of digits before the decimal point, bounded on both sides.
///
/// `effective_precision = max(precision, scale + 1)` keeps the count at 1
/// for purely fractional values like `0.01`, whose raw precision is below
/// their scale.
fn check_integer_digits(value: &BigDecimal, rules: &ValidationRules) -> Option<String> {
    let scale = i64::from(value.scale());
    let precision = value.precision() as i64;

    let effective_precision = precision.max(scale + 1);
    let integer_digits = effective_precision - scale;

    if integer_digits < rules.min_integer_digits || integer_digits > rules.max_integer_digits {
        return Some(format!(
            "The count of the digits before the point is out of range. \
             It should be in the range {} - {} but is {}.",
            rules.min_integer_digits, rules.max_integer_digits, integer_digits
        ));
    }

    None
}

/// Count of digits after the decimal point, equal to the scale once the
/// exponent has been normalized.
fn check_fractional_digits(value: &BigDecimal, rules: &ValidationRules) -> Option<String> {
    let fractional_digits = i64::from(value.scale());

    if fractional_digits > rules.max_fractional_digits {
        return Some(format!(
            "The count of the digits after the point is too high. \
             It should be less than or equal to {} but is {}.",
            rules.max_fractional_digits, fractional_digits
        ));
    }

    None
}

/// Inclusive upper bound, compared exactly. The f64 renderings appear only
/// in the message.
fn check_upper_bound(value: &BigDecimal, rules: &ValidationRules) -> Option<String> {
    if value > &rules.max_value {
        return Some(format!(
            "The value {} is too high. It should be less than or equal to {}.",
            value.to_f64(),
            rules.max_value.to_f64()
        ));
    }

    None
}

/// Inclusive lower bound, compared exactly.
fn check_lower_bound(value: &BigDecimal, rules: &ValidationRules) -> Option<String> {
    if value < &rules.min_value {
        return Some(format!(
            "The value {} is too small. It should be greater than or equal to {}.",
            value.to_f64(),
            rules.min_value.to_f64()
        ));
    }

    None
}

// ============================================================================
// Tests
// ============================================================================
