//! Recommendation synthesis
//!
//! Fuses the profile and market analyses into one ranked recommendation.
//! Deterministic: identical inputs always produce the identical output,
//! with ties broken by lexical crop-name order.

use thiserror::Error;

use crate::models::{FarmerInput, MarketAnalysis, ProfileAnalysis, Recommendation};
use crate::types::clamp_unit;

/// Budget at or above which the profitability weight is boosted
const HIGH_BUDGET_THRESHOLD: f64 = 50_000.0;

/// Weight shifted away from sustainability by a budget or scarcity signal
const WEIGHT_SHIFT: f64 = 0.1;

const BASE_SUSTAINABILITY_WEIGHT: f64 = 0.4;
const BASE_PROFITABILITY_WEIGHT: f64 = 0.3;
const BASE_WATER_WEIGHT: f64 = 0.3;

// Baseline estimate factors. Placeholders for a real agronomic model; kept
// deterministic and unit-consistent so downstream consumers can rely on the
// invariants (estimates are always non-negative).
const BASE_YIELD_T_PER_HA: f64 = 2.5;
const BASE_WATER_M3_PER_HA: f64 = 1500.0;
const NOMINAL_PRICE_PER_TON: f64 = 180.0;
const CARBON_T_PER_YIELD_TON: f64 = 0.4;

/// Synthesis failure: no viable candidate crops
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthesisError {
    #[error("Insufficient market data: {0}")]
    InsufficientData(String),
}

/// Scoring weights for the weighted combination, summing to 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub sustainability: f64,
    pub profitability: f64,
    pub water_efficiency: f64,
}

/// Derive scoring weights from the farmer profile
///
/// A high budget shifts weight from sustainability toward profitability;
/// scarce water shifts weight from sustainability toward water efficiency.
pub fn weights_for(input: &FarmerInput) -> Weights {
    let mut sustainability = BASE_SUSTAINABILITY_WEIGHT;
    let mut profitability = BASE_PROFITABILITY_WEIGHT;
    let mut water_efficiency = BASE_WATER_WEIGHT;

    if input.budget >= HIGH_BUDGET_THRESHOLD {
        sustainability -= WEIGHT_SHIFT;
        profitability += WEIGHT_SHIFT;
    }
    if input.water_availability.eq_ignore_ascii_case("low") {
        sustainability -= WEIGHT_SHIFT;
        water_efficiency += WEIGHT_SHIFT;
    }

    Weights {
        sustainability: sustainability.max(0.0),
        profitability,
        water_efficiency,
    }
}

/// Fuse both analyses into the final recommendation
///
/// Selection: among crops present in the market analysis, maximize
/// w_s * sustainability + w_p * profitability + w_w * water_efficiency.
/// The profitability term is per-crop; sustainability and water efficiency
/// come from the profile ratings. The BTreeMap iteration order plus a
/// strict improvement test make the lexically smallest crop win ties.
pub fn synthesize(
    profile: &ProfileAnalysis,
    market: &MarketAnalysis,
    input: &FarmerInput,
) -> Result<Recommendation, SynthesisError> {
    if market.is_empty() {
        return Err(SynthesisError::InsufficientData(format!(
            "No viable crop candidates for location '{}'",
            input.location
        )));
    }

    let weights = weights_for(input);
    let sustainability = clamp_unit(profile.soil_suitability.rating.score());
    let water_efficiency = clamp_unit(profile.water_efficiency.rating.score());

    let mut best: Option<(&str, f64, f64)> = None;
    for (crop, &profitability) in &market.profitability {
        let weighted = weights.sustainability * sustainability
            + weights.profitability * profitability
            + weights.water_efficiency * water_efficiency;
        // Strict comparison keeps the first (lexically smallest) crop on ties
        if best.map_or(true, |(_, _, s)| weighted > s) {
            best = Some((crop, profitability, weighted));
        }
    }

    let Some((crop_name, profitability_score, _)) = best else {
        return Err(SynthesisError::InsufficientData(format!(
            "No viable crop candidates for location '{}'",
            input.location
        )));
    };

    Ok(Recommendation {
        crop_name: crop_name.to_string(),
        sustainability_score: sustainability,
        profitability_score: clamp_unit(profitability_score),
        water_efficiency_score: water_efficiency,
        expected_yield: expected_yield(sustainability, input.farm_size),
        estimated_profit: estimated_profit(sustainability, profitability_score, input.farm_size),
        water_requirement: water_requirement(water_efficiency, input.farm_size),
        carbon_footprint: carbon_footprint(sustainability, input.farm_size),
    })
}

fn expected_yield(sustainability: f64, farm_size_ha: f64) -> f64 {
    (BASE_YIELD_T_PER_HA * (0.5 + sustainability / 2.0) * farm_size_ha).max(0.0)
}

fn estimated_profit(sustainability: f64, profitability: f64, farm_size_ha: f64) -> f64 {
    (expected_yield(sustainability, farm_size_ha) * NOMINAL_PRICE_PER_TON * profitability).max(0.0)
}

fn water_requirement(water_efficiency: f64, farm_size_ha: f64) -> f64 {
    // Efficient water use shrinks the requirement, never below 80% of base
    (BASE_WATER_M3_PER_HA * (1.2 - 0.4 * water_efficiency) * farm_size_ha).max(0.0)
}

fn carbon_footprint(sustainability: f64, farm_size_ha: f64) -> f64 {
    (expected_yield(sustainability, farm_size_ha)
        * CARBON_T_PER_YIELD_TON
        * (1.1 - 0.3 * sustainability))
        .max(0.0)
}
