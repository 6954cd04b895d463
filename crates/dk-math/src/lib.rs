//! distkit math utilities.

pub mod error;
pub mod math;

pub use error::{MathError, Result};
pub use math::descriptive::*;
pub use math::grid::*;
pub use math::integer::*;
pub use math::sample;
pub use math::stable::*;
