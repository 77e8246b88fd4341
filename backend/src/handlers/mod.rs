//! HTTP handlers for the Sustainable Farming Advisor

pub mod farmer;
pub mod health;
pub mod recommendation;

pub use farmer::*;
pub use health::*;
pub use recommendation::*;
