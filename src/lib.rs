// ============================================================================
// BigDecimal Validator Library
// Scale/precision-aware validation of arbitrary-precision decimals
// ============================================================================

//! # BigDecimal Validator
//!
//! Validates an arbitrary-precision decimal number against a declarative
//! rule set: bounds on the count of integer (pre-point) digits, a maximum
//! count of fractional (post-point) digits, and an inclusive numeric range.
//!
//! ## Features
//!
//! - **Exact decimal semantics** — digit counting and range comparison use
//!   the big-integer magnitude and scale directly, never floating point
//! - **Scientific-notation normalization** — `1E8` counts 9 integer digits,
//!   `1E-88` counts 88 fractional digits
//! - **Fail-fast pipeline** — checks run in a fixed order and exactly one
//!   failure message is produced per call
//! - **Pure and shareable** — a validator instance holds no per-call state
//!   and may be used from many threads at once
//!
//! ## Example
//!
//! ```rust
//! use bigdecimal_validator::prelude::*;
//!
//! let rules = ValidationRules::new()
//!     .with_min_integer_digits(1)
//!     .with_max_integer_digits(3)
//!     .with_max_fractional_digits(2)
//!     .with_min_value(0)
//!     .with_max_value(150);
//!
//! let validator = DecimalValidator::new();
//!
//! let value: BigDecimal = "124.2".parse().unwrap();
//! assert!(validator.validate(Some(&value), &rules).is_valid());
//!
//! let too_precise: BigDecimal = "124.225".parse().unwrap();
//! let result = validator.validate(Some(&too_precise), &rules);
//! assert_eq!(
//!     result.fail_message(),
//!     Some("The count of the digits after the point is too high. \
//!           It should be less than or equal to 2 but is 3."),
//! );
//! ```

pub mod numeric;
pub mod validator;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{BigDecimal, DecimalParseError, DecimalResult};
    pub use crate::validator::{DecimalValidator, ValidationResult, ValidationRules};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_validation() {
        let rules = ValidationRules::new()
            .with_min_integer_digits(1)
            .with_max_integer_digits(3)
            .with_max_fractional_digits(2)
            .with_min_value(0)
            .with_max_value(150);
        let validator = DecimalValidator::new();

        let value: BigDecimal = "124.2".parse().unwrap();
        let result = validator.validate(Some(&value), &rules);
        assert!(result.is_valid());
        assert_eq!(result.fail_message(), None);

        let negative: BigDecimal = "-1".parse().unwrap();
        let result = validator.validate(Some(&negative), &rules);
        assert_eq!(
            result.fail_message(),
            Some("The value -1 is too small. It should be greater than or equal to 0.")
        );

        let wide: BigDecimal = "5684".parse().unwrap();
        let result = validator.validate(Some(&wide), &rules);
        assert_eq!(
            result.fail_message(),
            Some(
                "The count of the digits before the point is out of range. \
                 It should be in the range 1 - 3 but is 4."
            )
        );
    }

    #[test]
    fn test_rust_decimal_boundary_conversion() {
        let rules = ValidationRules::new()
            .with_max_integer_digits(5)
            .with_max_value(rust_decimal::Decimal::new(15000, 2)); // 150.00

        let value = BigDecimal::from(rust_decimal::Decimal::new(12302, 2)); // 123.02
        let result = DecimalValidator::new().validate(Some(&value), &rules);
        assert!(result.is_valid());
    }

    #[test]
    fn test_default_rules_accept_ordinary_amounts() {
        let validator = DecimalValidator::new();
        let rules = ValidationRules::default();

        for text in ["0", "0.00", "1234567890.12", "-999.99", "1E-1"] {
            let value: BigDecimal = text.parse().unwrap();
            let result = validator.validate(Some(&value), &rules);
            assert!(result.is_valid(), "{} should pass default rules", text);
        }
    }
}
