// src/error.rs
// Error taxonomy shared by every matrix operation.

use crate::numerics::types::dimensions::Dimensions;

/// Crate-wide result alias.
pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

/// Which index of a `(row, column)` pair was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Coarse classification of a [`MatrixError`].
///
/// Several variants can describe the same kind of failure (a ragged input and
/// an add between differently shaped operands are both shape errors), so
/// callers that only care about the category can branch on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Shape,
    ArgumentCount,
    Index,
    NullArgument,
    Format,
    Parse,
    Io,
}

/// Errors that can occur while building, combining or serializing matrices
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("Incompatible shapes for {operation}: {left} and {right}")]
    Shape {
        operation: &'static str,
        left: Dimensions,
        right: Dimensions,
    },

    #[error("Rows cannot be interpreted as a matrix (row {row} differs in length):\n{rendering}")]
    RaggedRows { row: usize, rendering: String },

    #[error("Matrix must have at least one row and one column, got {rows}x{columns}")]
    EmptyShape { rows: usize, columns: usize },

    #[error("Matrix of {rows}x{columns} entries is too large to address")]
    TooLarge { rows: usize, columns: usize },

    #[error("Expected {expected} values for a {rows}x{columns} matrix, got {actual}")]
    ArgumentCount {
        rows: usize,
        columns: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid {axis} index: {index} is not below {len}")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },

    #[error("No matrices given to {operation}")]
    NullArgument { operation: &'static str },

    #[error("Invalid separator {separator:?}: {reason}")]
    Format {
        separator: String,
        reason: &'static str,
    },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::Shape { .. }
            | MatrixError::RaggedRows { .. }
            | MatrixError::EmptyShape { .. }
            | MatrixError::TooLarge { .. } => ErrorKind::Shape,
            MatrixError::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            MatrixError::IndexOutOfBounds { .. } => ErrorKind::Index,
            MatrixError::NullArgument { .. } => ErrorKind::NullArgument,
            MatrixError::Format { .. } => ErrorKind::Format,
            MatrixError::Parse { .. } => ErrorKind::Parse,
            MatrixError::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_shape_variants() {
        let shape = MatrixError::Shape {
            operation: "add",
            left: Dimensions::new(1, 3),
            right: Dimensions::new(3, 1),
        };
        let ragged = MatrixError::RaggedRows { row: 1, rendering: String::new() };
        let empty = MatrixError::EmptyShape { rows: 0, columns: 2 };
        let too_large = MatrixError::TooLarge { rows: usize::MAX, columns: 2 };

        assert_eq!(shape.kind(), ErrorKind::Shape);
        assert_eq!(ragged.kind(), ErrorKind::Shape);
        assert_eq!(empty.kind(), ErrorKind::Shape);
        assert_eq!(too_large.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_messages() {
        let err = MatrixError::Shape {
            operation: "add",
            left: Dimensions::new(1, 3),
            right: Dimensions::new(3, 1),
        };
        assert_eq!(err.to_string(), "Incompatible shapes for add: 1x3 and 3x1");

        let err = MatrixError::IndexOutOfBounds { axis: Axis::Column, index: 7, len: 3 };
        assert_eq!(err.to_string(), "Invalid column index: 7 is not below 3");

        let err = MatrixError::Format { separator: "6".into(), reason: "contains a digit" };
        assert_eq!(err.to_string(), "Invalid separator \"6\": contains a digit");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MatrixError = io.into();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
