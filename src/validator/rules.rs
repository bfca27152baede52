// ============================================================================
// Validation Rules
// Declarative bounds on digit counts and numeric range
// ============================================================================

use crate::numeric::BigDecimal;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rule set a decimal value is validated against.
///
/// Five bounds, all inclusive:
/// - `min_integer_digits` / `max_integer_digits`: allowed count of digits
///   before the decimal point (defaults 1 and 10)
/// - `max_fractional_digits`: allowed count of digits after the decimal
///   point (default 2)
/// - `min_value` / `max_value`: numeric range, compared exactly (defaults
///   are the f64 extremes ±1.7976931348623157E308, stored as exact decimals)
///
/// Built once and never mutated; consistency of the bounds (e.g.
/// `min_integer_digits <= max_integer_digits`) is the caller's
/// responsibility.
///
/// # Example
/// ```
/// use bigdecimal_validator::validator::ValidationRules;
///
/// let rules = ValidationRules::new()
///     .with_min_integer_digits(1)
///     .with_max_integer_digits(3)
///     .with_max_fractional_digits(2)
///     .with_min_value(0)
///     .with_max_value(150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationRules {
    /// Minimum count of digits before the decimal point
    pub min_integer_digits: i64,

    /// Maximum count of digits before the decimal point
    pub max_integer_digits: i64,

    /// Maximum count of digits after the decimal point
    pub max_fractional_digits: i64,

    /// Inclusive lower bound on the value
    pub min_value: BigDecimal,

    /// Inclusive upper bound on the value
    pub max_value: BigDecimal,
}

/// Largest finite f64 (1.7976931348623157E308) as an exact decimal.
fn largest_double() -> BigDecimal {
    BigDecimal::new(BigInt::from(17_976_931_348_623_157i64), -292)
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_integer_digits: 1,
            max_integer_digits: 10,
            max_fractional_digits: 2,
            min_value: -largest_double(),
            max_value: largest_double(),
        }
    }
}

impl ValidationRules {
    /// Create a rule set with the default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the minimum count of integer digits.
    pub fn with_min_integer_digits(mut self, count: i64) -> Self {
        self.min_integer_digits = count;
        self
    }

    /// Builder method: set the maximum count of integer digits.
    pub fn with_max_integer_digits(mut self, count: i64) -> Self {
        self.max_integer_digits = count;
        self
    }

    /// Builder method: set the maximum count of fractional digits.
    pub fn with_max_fractional_digits(mut self, count: i64) -> Self {
        self.max_fractional_digits = count;
        self
    }

    /// Builder method: set the inclusive lower value bound.
    pub fn with_min_value(mut self, value: impl Into<BigDecimal>) -> Self {
        self.min_value = value.into();
        self
    }

    /// Builder method: set the inclusive upper value bound.
    pub fn with_max_value(mut self, value: impl Into<BigDecimal>) -> Self {
        self.max_value = value.into();
        self
    }
}
