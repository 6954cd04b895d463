//! Error types for the numeric primitives.
//!
//! Contract violations surface as typed errors at the public API;
//! `debug_assert!` covers the invariants internal callers are required
//! to uphold.

use thiserror::Error;

/// Result type alias for dk-math operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Contract violations surfaced by the numeric primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("empty input to {0}")]
    EmptyInput(&'static str),

    #[error("insufficient data: need at least {needed} elements, got {actual}")]
    InsufficientData { needed: usize, actual: usize },

    #[error("cannot normalize: total mass is zero or non-finite")]
    ZeroMass,

    #[error("invalid grid request: {0}")]
    BadGrid(String),
}
