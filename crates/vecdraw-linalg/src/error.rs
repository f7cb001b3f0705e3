use thiserror::Error;

use crate::Shape;

/// Errors returned by fallible linear algebra operations.
///
/// Every operation either succeeds completely or fails before producing any output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An operand has the wrong kind or too few components for the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operands of a binary operation disagree in kind or length.
    #[error("dimension mismatch: {left} and {right}")]
    DimensionMismatch { left: Shape, right: Shape },

    /// The input describes degenerate geometry (zero-length vector, coincident clip planes, ...).
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),

    /// The operation does not support objects with this many components or rows.
    #[error("unsupported size: {0}")]
    UnsupportedSize(usize),
}
