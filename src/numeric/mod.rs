// ============================================================================
// Numeric Module
// Arbitrary-precision decimal values with exact scale/precision semantics
// ============================================================================
//
// This module provides:
// - BigDecimal: big-integer magnitude plus decimal scale
// - DecimalParseError: error type for textual construction
//
// Design principles:
// - Value = unscaled × 10^(-scale); negative scale is a positive exponent
// - Precision is computed, never stored (digit count of the magnitude)
// - Comparisons align scales exactly; no floating-point involvement
// - Immutable value type; every operation returns a new value

mod big_decimal;
mod errors;

pub use big_decimal::BigDecimal;
pub use errors::{DecimalParseError, DecimalResult};
