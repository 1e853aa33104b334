//! Error types for the math primitives.

use thiserror::Error;

/// Errors raised by checked math operations.
///
/// All failures are synchronous and propagate straight to the caller;
/// nothing is retried or recovered internally. The absent-operand error
/// class of comparable libraries has no equivalent here, since operands
/// are references and cannot be absent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A checked slice setter was given the wrong number of components.
    #[error("expected {expected} components, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Attempted to normalize a vector of length zero.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,
}
