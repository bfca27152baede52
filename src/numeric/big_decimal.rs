// ============================================================================
// Arbitrary-Precision Decimal
// Exact scale/precision-aware decimal values backed by a big-integer magnitude
// ============================================================================

use super::errors::{DecimalParseError, DecimalResult};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arbitrary-precision signed decimal number.
///
/// Internally stores `unscaled × 10^(-scale)`: an unbounded integer magnitude
/// and a count of digits to the right of the decimal point. A negative scale
/// denotes a value written with a positive power-of-ten exponent (`1E8` is
/// unscaled 1, scale -8).
///
/// Construction never normalizes: trailing zeros and the given scale are
/// preserved exactly, so `"0.00"` keeps scale 2 and precision 1. Equality and
/// ordering compare numeric values across scales (`2.0 == 2.00`).
///
/// # Example
/// ```
/// use bigdecimal_validator::numeric::BigDecimal;
///
/// let value: BigDecimal = "124.2".parse().unwrap();
/// assert_eq!(value.scale(), 1);
/// assert_eq!(value.precision(), 4);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i32,
}

/// 10^n as a big integer
fn ten_pow(n: u32) -> BigInt {
    BigInt::from(10u32).pow(n)
}

impl BigDecimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from an unscaled magnitude and a scale.
    ///
    /// The value is `unscaled × 10^(-scale)`; no normalization is applied.
    pub const fn new(unscaled: BigInt, scale: i32) -> Self {
        Self { unscaled, scale }
    }

    /// Zero with scale 0.
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The count of digits to the right of the decimal point.
    ///
    /// Negative when the value is held in positive-exponent form.
    #[inline]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// The unscaled integer magnitude.
    #[inline]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The count of significant base-10 digits in the unscaled magnitude.
    ///
    /// Zero has precision 1.
    pub fn precision(&self) -> u64 {
        self.unscaled.magnitude().to_str_radix(10).len() as u64
    }

    /// Check if the value is zero (at any scale).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Check if the value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    // ========================================================================
    // Scale Arithmetic
    // ========================================================================

    /// Multiply the value by `10^exp`, exactly.
    ///
    /// This only shifts the scale; the magnitude is untouched.
    pub fn mul_pow10(&self, exp: i32) -> Self {
        Self {
            unscaled: self.unscaled.clone(),
            scale: self.scale - exp,
        }
    }

    /// Rewrite a positive-exponent value (negative scale) as the equivalent
    /// decimal with scale 0, by folding the exponent into the magnitude.
    ///
    /// `1E8` (unscaled 1, scale -8) becomes unscaled 100000000, scale 0.
    /// Values with scale >= 0 are returned unchanged, making digit counting
    /// well-defined for scientific-notation inputs.
    pub fn normalize_exponent(&self) -> Self {
        if self.scale >= 0 {
            self.clone()
        } else {
            Self {
                unscaled: &self.unscaled * ten_pow(self.scale.unsigned_abs()),
                scale: 0,
            }
        }
    }

    /// Truncate toward zero at scale 0, dropping all fractional digits.
    ///
    /// Never rounds: `100.03` becomes `100`, `-100.03` becomes `-100`.
    pub fn trunc(&self) -> Self {
        if self.scale <= 0 {
            self.normalize_exponent()
        } else {
            Self {
                unscaled: &self.unscaled / ten_pow(self.scale as u32),
                scale: 0,
            }
        }
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Approximate as an f64.
    ///
    /// Lossy; intended for rendering values in human-readable messages, never
    /// for comparisons.
    pub fn to_f64(&self) -> f64 {
        let magnitude = self.unscaled.to_f64().unwrap_or(f64::NAN);
        let exp = i32::try_from(-i64::from(self.scale)).unwrap_or(i32::MAX);
        magnitude * 10f64.powi(exp)
    }

    /// Convert to a `rust_decimal::Decimal`, if the value fits its 96-bit
    /// mantissa and 0..=28 scale.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        let normalized = self.normalize_exponent();
        let scale = u32::try_from(normalized.scale).ok()?;
        if scale > 28 {
            return None;
        }
        let mantissa = normalized.unscaled.to_i128()?;
        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale).ok()
    }

    /// Value-identical representation with trailing zeros stripped from the
    /// magnitude. `2.0`, `2.00` and `2E0` all strip to (2, 0).
    fn stripped(&self) -> (BigInt, i32) {
        if self.unscaled.is_zero() {
            return (BigInt::zero(), 0);
        }
        let ten = BigInt::from(10u32);
        let mut unscaled = self.unscaled.clone();
        let mut scale = self.scale;
        while (&unscaled % &ten).is_zero() {
            unscaled /= &ten;
            scale -= 1;
        }
        (unscaled, scale)
    }
}

// ============================================================================
// Comparison
// Total order over numeric values of arbitrary scale, with no precision loss
// ============================================================================

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs_sign, rhs_sign) = (self.unscaled.sign(), other.unscaled.sign());
        if lhs_sign != rhs_sign {
            return lhs_sign.cmp(&rhs_sign);
        }
        if self.scale == other.scale {
            return self.unscaled.cmp(&other.unscaled);
        }
        // Align both magnitudes at the larger scale before comparing.
        // |scale difference| of two i32 values always fits a u32.
        let diff = (i64::from(self.scale) - i64::from(other.scale)).unsigned_abs() as u32;
        if self.scale > other.scale {
            self.unscaled.cmp(&(&other.unscaled * ten_pow(diff)))
        } else {
            (&self.unscaled * ten_pow(diff)).cmp(&other.unscaled)
        }
    }
}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BigDecimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigDecimal {}

impl Hash for BigDecimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with value equality: hash the trailing-zero-free form.
        let (unscaled, scale) = self.stripped();
        unscaled.hash(state);
        scale.hash(state);
    }
}

impl Neg for BigDecimal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            unscaled: -self.unscaled,
            scale: self.scale,
        }
    }
}

// ============================================================================
// Integer and API-Boundary Conversions
// ============================================================================

impl From<BigInt> for BigDecimal {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl From<i32> for BigDecimal {
    fn from(value: i32) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<i128> for BigDecimal {
    fn from(value: i128) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

/// Exact conversion from `rust_decimal::Decimal` (mantissa and scale carry
/// over unchanged). Intended for API boundaries where callers already hold
/// fixed-precision decimals.
impl From<rust_decimal::Decimal> for BigDecimal {
    fn from(value: rust_decimal::Decimal) -> Self {
        Self::new(BigInt::from(value.mantissa()), value.scale() as i32)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for BigDecimal {
    type Err = DecimalParseError;

    /// Parse plain or scientific notation.
    ///
    /// # Examples
    /// - "124.2"  -> unscaled 1242, scale 1
    /// - "0.00"   -> unscaled 0, scale 2
    /// - "1E8"    -> unscaled 1, scale -8
    /// - "1E-88"  -> unscaled 1, scale 88
    fn from_str(s: &str) -> DecimalResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DecimalParseError::Empty);
        }

        let (is_negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        // Split off the exponent part
        let (mantissa, exp) = if let Some(pos) = s.find(['e', 'E']) {
            (&s[..pos], parse_exponent(&s[pos + 1..])?)
        } else {
            (s, 0i64)
        };

        // Split mantissa on the decimal point
        let (int_str, frac_str) = if let Some(pos) = mantissa.find('.') {
            (&mantissa[..pos], &mantissa[pos + 1..])
        } else {
            (mantissa, "")
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(DecimalParseError::Empty);
        }

        let digits = format!("{}{}", int_str, frac_str);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecimalParseError::InvalidDigit);
        }

        let scale = i32::try_from(frac_str.len() as i64 - exp)
            .map_err(|_| DecimalParseError::ExponentOutOfRange)?;

        let mut unscaled =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(DecimalParseError::InvalidDigit)?;
        if is_negative {
            unscaled = -unscaled;
        }

        Ok(Self::new(unscaled, scale))
    }
}

fn parse_exponent(exp_str: &str) -> DecimalResult<i64> {
    if exp_str.is_empty() {
        return Err(DecimalParseError::InvalidExponent);
    }
    match exp_str.parse::<i64>() {
        Ok(exp) => Ok(exp),
        Err(_) => {
            let digits = exp_str
                .strip_prefix(['+', '-'])
                .unwrap_or(exp_str);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Err(DecimalParseError::ExponentOutOfRange)
            } else {
                Err(DecimalParseError::InvalidExponent)
            }
        },
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigDecimal(\"{}\", scale={})", self, self.scale)
    }
}

impl fmt::Display for BigDecimal {
    /// Plain (non-scientific) notation, preserving the stored scale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.unscaled.magnitude().to_str_radix(10);
        if self.unscaled.sign() == Sign::Minus {
            f.write_str("-")?;
        }

        if self.scale <= 0 {
            f.write_str(&digits)?;
            for _ in 0..self.scale.unsigned_abs() {
                f.write_str("0")?;
            }
            Ok(())
        } else {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (int_part, frac_part) = digits.split_at(digits.len() - scale);
                write!(f, "{}.{}", int_part, frac_part)
            } else {
                write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
