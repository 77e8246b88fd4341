//! The two-stage analysis-and-fusion pipeline
//!
//! Profile and market analysis are pure functions over the immutable
//! reference datasets; synthesis fuses their results into one ranked
//! recommendation. None of these stages performs I/O.

mod market;
mod profile;
mod synthesis;

pub use market::*;
pub use profile::*;
pub use synthesis::*;
