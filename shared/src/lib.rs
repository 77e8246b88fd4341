//! Shared types and domain logic for the Sustainable Farming Advisor
//!
//! This crate contains the data model, the read-only reference datasets,
//! and the pure analysis pipeline shared between the backend and its tests.

pub mod analysis;
pub mod datasets;
pub mod models;
pub mod types;
pub mod validation;

pub use analysis::*;
pub use datasets::*;
pub use models::*;
pub use types::*;
pub use validation::*;
