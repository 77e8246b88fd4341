//! Database models for the Sustainable Farming Advisor
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
