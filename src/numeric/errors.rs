// ============================================================================
// Numeric Errors
// Error types for decimal construction and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing a decimal from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalParseError {
    /// Input was empty or contained only a sign
    Empty,
    /// A character outside `0-9`, sign, point or exponent marker
    InvalidDigit,
    /// Exponent part was missing or not an integer
    InvalidExponent,
    /// Exponent does not fit the supported scale range (i32)
    ExponentOutOfRange,
}

impl fmt::Display for DecimalParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalParseError::Empty => write!(f, "empty decimal literal"),
            DecimalParseError::InvalidDigit => {
                write!(f, "invalid digit in decimal literal")
            },
            DecimalParseError::InvalidExponent => {
                write!(f, "invalid exponent in decimal literal")
            },
            DecimalParseError::ExponentOutOfRange => {
                write!(f, "exponent out of supported range")
            },
        }
    }
}

impl std::error::Error for DecimalParseError {}

/// Result type alias for decimal construction
pub type DecimalResult<T> = Result<T, DecimalParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DecimalParseError::Empty.to_string(), "empty decimal literal");
        assert_eq!(
            DecimalParseError::ExponentOutOfRange.to_string(),
            "exponent out of supported range"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(DecimalParseError::Empty, DecimalParseError::Empty);
        assert_ne!(DecimalParseError::Empty, DecimalParseError::InvalidDigit);
    }
}
