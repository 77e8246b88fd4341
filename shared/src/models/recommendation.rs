//! Crop recommendation models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Final ranked crop recommendation
///
/// Invariant: the three normalized scores are in [0, 1]; the four estimates
/// are non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub crop_name: String,
    pub sustainability_score: f64,
    pub profitability_score: f64,
    pub water_efficiency_score: f64,
    /// Tons over the whole farm
    pub expected_yield: f64,
    /// Currency units
    pub estimated_profit: f64,
    /// Cubic meters over the whole farm
    pub water_requirement: f64,
    /// Tons CO2-equivalent
    pub carbon_footprint: f64,
}

/// Persisted recommendation row, linked 1:1 with the farmer row created in
/// the same transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: i64,
    pub farmer_id: i64,
    pub crop_id: i64,
    pub crop_name: String,
    pub sustainability_score: f64,
    pub profitability_score: f64,
    pub water_efficiency_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Identifiers returned by a successful transactional store
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StoreReceipt {
    pub farmer_id: i64,
    pub recommendation_id: i64,
}
