//! Error types for the distkit containers.

use thiserror::Error;

/// Result type alias for dk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the container operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Math(#[from] dk_math::MathError),

    #[error("cannot analyze an empty dataset: no dimensionality to infer")]
    EmptyDataset,

    #[error("at least one boundary time is required")]
    EmptyBoundaries,

    #[error("boundary times must be non-decreasing (violated at index {index})")]
    UnsortedBoundaries { index: usize },

    #[error("sample {sample} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        sample: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
