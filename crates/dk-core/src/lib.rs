//! distkit core containers.
//!
//! This crate provides the two data containers the toolkit is built around:
//! - [`ProbDist`]: a labeled discrete probability distribution carrying
//!   synchronized linear and log-domain probability vectors, with
//!   normalization, sampling, sorting, and entropy.
//! - [`TemporalDataset`]: time-stamped multi-dimensional samples binned
//!   into half-open intervals, with per-interval per-dimension count,
//!   mean, and sample standard deviation.
//!
//! Numeric kernels live in `dk-math`; everything random takes an explicit
//! `rand::Rng` so callers control seeding.

pub mod dist;
pub mod error;
pub mod temporal;

pub use dist::ProbDist;
pub use error::{Error, Result};
pub use temporal::{DimStats, TemporalDataset, TemporalSample};
