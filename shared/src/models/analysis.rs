//! Analysis result models
//!
//! Both analysis results are immutable once produced. Each is owned by the
//! request that produced it and consumed only by the synthesizer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{FarmScale, Rating, Trend};

/// A rated aspect of the farmer profile with guidance strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedAspect {
    pub rating: Rating,
    pub recommendations: Vec<String>,
}

/// Farm size classification with tier-specific guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSizeClass {
    pub scale: FarmScale,
    pub recommendations: Vec<String>,
}

/// Output of the profile analysis stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub soil_suitability: RatedAspect,
    pub water_efficiency: RatedAspect,
    pub farm_size_class: FarmSizeClass,
}

/// Output of the market analysis stage
///
/// BTreeMap keys keep candidate iteration in lexical crop-name order, which
/// the synthesizer relies on for stable tie-breaking.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MarketAnalysis {
    pub demand_trends: BTreeMap<String, Trend>,
    pub price_trends: BTreeMap<String, Trend>,
    /// Normalized profitability score per candidate crop, in [0, 1]
    pub profitability: BTreeMap<String, f64>,
}

impl MarketAnalysis {
    /// True when no candidate crop could be resolved
    pub fn is_empty(&self) -> bool {
        self.profitability.is_empty()
    }
}
