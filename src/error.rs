use std::fmt;

/// All errors returned by `vecmat`.
///
/// Every error is raised synchronously at the call that detects the violated
/// precondition; there is no retry or partial-failure recovery. An invalid
/// input is always a caller error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor argument is malformed (ragged grid, wrong buffer length).
    InvalidInput { reason: &'static str },

    /// A binary operation was attempted between operands of incompatible size.
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A square-only operation was invoked on a non-square matrix.
    NotSquare { rows: usize, cols: usize },

    /// The matrix has a zero determinant and cannot be inverted.
    SingularMatrix,

    /// An angle or axis query was made against a zero-magnitude operand.
    DivisionByZero { context: &'static str },

    /// The operation is not supported for the given argument.
    InvalidArgument { reason: &'static str },
}

impl Error {
    pub(crate) fn dim(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            expected: vec![expected],
            got: vec![got],
        }
    }

    pub(crate) fn shape(expected: &[usize], got: &[usize]) -> Self {
        Self::DimensionMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected:?}, got {got:?}")
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {rows}x{cols}")
            }
            Self::SingularMatrix => write!(f, "singular matrix"),
            Self::DivisionByZero { context } => {
                write!(f, "division by zero: {context}")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout `vecmat`.
pub type Result<T> = std::result::Result<T, Error>;
