//! Business logic services for the Sustainable Farming Advisor

pub mod persistence;

pub use persistence::PersistenceService;
