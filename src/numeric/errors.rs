// ============================================================================
// Numeric Errors
// Error types for the decimal helper functions
// ============================================================================

use std::fmt;

/// Errors that can occur while evaluating a numeric helper.
///
/// The defined-zero cases (empty means, the relative change epsilon, the
/// slope guard) are not represented here; those return a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Intermediate result left the representable decimal range
    Overflow,
    /// Sum of weights was zero
    DivisionByZero,
    /// Argument outside the domain the operation accepts
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: argument out of range"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded decimal range"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: argument out of range"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero");
    }
}
