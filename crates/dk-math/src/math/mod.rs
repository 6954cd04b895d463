//! Core math modules.

pub mod descriptive;
pub mod grid;
pub mod integer;
pub mod sample;
pub mod stable;
