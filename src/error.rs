//! Error types for carril operations

use thiserror::Error;

/// Result type for carril operations
pub type Result<T> = std::result::Result<T, SimdError>;

/// Errors that can occur while building or operating on SIMD vectors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimdError {
    /// Wrong number of lanes supplied to a constructor
    #[error("Lane count mismatch: expected {expected}, got {actual}")]
    LaneCountMismatch {
        /// Lane count of the target vector
        expected: usize,
        /// Number of values supplied, counted up to `expected + 1`
        actual: usize,
    },

    /// Lane index outside `[0, lanes)`
    #[error("Lane index {index} out of range for {lanes} lanes")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Lane count of the vector
        lanes: usize,
    },

    /// Integer division or remainder by zero
    #[error("Division by zero in lane {lane}")]
    DivisionByZero {
        /// Lowest lane holding a zero divisor
        lane: usize,
    },

    /// Integer division overflow (`MIN / -1`)
    #[error("Arithmetic overflow in lane {lane}")]
    Overflow {
        /// Lowest lane that overflowed
        lane: usize,
    },

    /// Malformed vector literal
    #[error("Invalid vector literal: {0}")]
    Parse(String),
}

impl SimdError {
    /// Attach a lane index to a scalar arithmetic fault
    pub fn in_lane(fault: ArithmeticFault, lane: usize) -> Self {
        match fault {
            ArithmeticFault::DivisionByZero => SimdError::DivisionByZero { lane },
            ArithmeticFault::Overflow => SimdError::Overflow { lane },
        }
    }
}

/// Failure of a single scalar division or remainder
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticFault {
    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Quotient not representable
    #[error("overflow")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_count_mismatch_error() {
        let err = SimdError::LaneCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Lane count mismatch: expected 4, got 3");
    }

    #[test]
    fn test_index_out_of_range_error() {
        let err = SimdError::IndexOutOfRange { index: 8, lanes: 8 };
        assert_eq!(err.to_string(), "Lane index 8 out of range for 8 lanes");
    }

    #[test]
    fn test_division_by_zero_error() {
        let err = SimdError::DivisionByZero { lane: 1 };
        assert_eq!(err.to_string(), "Division by zero in lane 1");
    }

    #[test]
    fn test_parse_error() {
        let err = SimdError::Parse("missing ')'".to_string());
        assert_eq!(err.to_string(), "Invalid vector literal: missing ')'");
    }

    #[test]
    fn test_in_lane() {
        assert_eq!(
            SimdError::in_lane(ArithmeticFault::DivisionByZero, 3),
            SimdError::DivisionByZero { lane: 3 }
        );
        assert_eq!(
            SimdError::in_lane(ArithmeticFault::Overflow, 0),
            SimdError::Overflow { lane: 0 }
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = SimdError::LaneCountMismatch {
            expected: 2,
            actual: 5,
        };
        let err2 = SimdError::LaneCountMismatch {
            expected: 2,
            actual: 5,
        };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_arithmetic_fault_display() {
        assert_eq!(ArithmeticFault::DivisionByZero.to_string(), "division by zero");
        assert_eq!(ArithmeticFault::Overflow.to_string(), "overflow");
    }
}
