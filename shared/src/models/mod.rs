//! Domain models for the Sustainable Farming Advisor

mod analysis;
mod farmer;
mod recommendation;

pub use analysis::*;
pub use farmer::*;
pub use recommendation::*;
