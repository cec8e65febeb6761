//! Error types for the numeric primitives.
//!
//! Most functions here are infallible; checked component access returns
//! [`AstroResult<T>`].

use thiserror::Error;

/// Classification of numeric failures carried by [`AstroError::MathError`].
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
}

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_error_with_kind() {
        let err = AstroError::math_error("Vector3::get", MathErrorKind::InvalidInput, "index 4");
        assert!(err.to_string().contains("Math error in Vector3::get"));
        assert!(err.to_string().contains("InvalidInput"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}
