//! Farmer profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Farmer profile submitted for analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerInput {
    pub name: String,
    pub location: String,
    /// Farm size in hectares, must be positive
    pub farm_size: f64,
    /// Enum-like free text, e.g. "loam", "clay", "sandy"
    pub soil_type: String,
    /// One of "low", "medium", "high"
    pub water_availability: String,
    /// Empty means "consider all crops for the location"
    #[serde(default)]
    pub preferred_crops: Vec<String>,
    /// Available budget in currency units, must be positive
    pub budget: f64,
}

/// Persisted farmer row
///
/// Mirrors the `farmers` table; preferred_crops and budget are request-only
/// inputs and are not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerRecord {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub farm_size: f64,
    pub soil_type: String,
    pub water_availability: String,
    pub created_at: DateTime<Utc>,
}
