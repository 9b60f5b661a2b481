//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Failing to find a direction by name or to parse a direction along a meridian is not an error:
/// those operations return `None` instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReferencingError {
    /// Length of an input array does not match the expected number of elements.
    #[error("expected {expected} elements but got {actual}")]
    SizeMismatch {
        /// Number of elements required by the target shape.
        expected: usize,
        /// Number of elements actually provided.
        actual: usize,
    },
    /// Dimensions of matrices, points or transforms are not compatible with the operation.
    #[error("mismatched dimension in {operation}: expected {expected}, got {actual}")]
    MismatchedDimension {
        /// Name of the operation that failed.
        operation: &'static str,
        /// Dimension required by the operation.
        expected: usize,
        /// Dimension actually found.
        actual: usize,
    },
    /// Matrix or transform cannot be inverted.
    #[error("non invertible: {0}")]
    NonInvertible(String),
    /// Row or column index outside of the matrix.
    #[error("index ({row}, {column}) is out of bounds for a {rows}x{columns} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        columns: usize,
    },
}

impl ReferencingError {
    pub(crate) fn mismatched(operation: &'static str, expected: usize, actual: usize) -> Self {
        Self::MismatchedDimension {
            operation,
            expected,
            actual,
        }
    }
}

/// Error returned by the `FromStr` implementations of direction types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: '{0}'")]
pub struct ParseDirectionError(pub String);

/// Result type used by the crate.
pub type Result<T> = std::result::Result<T, ReferencingError>;
