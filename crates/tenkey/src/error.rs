//! Error types for calculator arithmetic

use thiserror::Error;

/// Result type for calculator arithmetic.
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while applying an operator.
///
/// Division by zero is the only arithmetic failure; overflow and NaN from
/// extreme inputs pass through as ordinary `f64` values and surface as
/// whatever their display conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("division by zero")]
    DivideByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero_display() {
        assert_eq!(format!("{}", CalcError::DivideByZero), "division by zero");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivideByZero);
        assert!(err.to_string().contains("division"));
    }
}
