//! Farmer profile analysis
//!
//! Maps the submitted profile against the farmer-history dataset to rate
//! soil suitability and water efficiency, and buckets the farm size into a
//! scale tier. Never fails on well-formed input: unknown categorical values
//! degrade to `Rating::Unrated` instead of erroring.

use crate::datasets::FarmerHistory;
use crate::models::{FarmSizeClass, FarmerInput, ProfileAnalysis, RatedAspect};
use crate::types::{FarmScale, Rating};

/// Farm size tier boundaries in hectares
const SMALLHOLDER_MAX_HA: f64 = 5.0;
const MID_SCALE_MAX_HA: f64 = 50.0;

/// Sustainability score thresholds (0-100 scale) for soil ratings
const SOIL_HIGH_THRESHOLD: f64 = 70.0;
const SOIL_MODERATE_THRESHOLD: f64 = 40.0;

/// Pluggable rating strategy for the profile stage
///
/// The baseline derives ratings from dataset aggregates; a real agronomic
/// model can be swapped in behind the same contract.
pub trait SuitabilityModel {
    fn soil_rating(&self, soil_type: &str, history: &FarmerHistory) -> Rating;
    fn water_rating(&self, water_availability: &str) -> Rating;
}

/// Baseline strategy: soil rating from the dataset's mean sustainability
/// score for the soil type, water rating from the declared availability
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineSuitability;

impl SuitabilityModel for BaselineSuitability {
    fn soil_rating(&self, soil_type: &str, history: &FarmerHistory) -> Rating {
        match history.mean_sustainability_for_soil(soil_type) {
            Some(mean) if mean >= SOIL_HIGH_THRESHOLD => Rating::High,
            Some(mean) if mean >= SOIL_MODERATE_THRESHOLD => Rating::Moderate,
            Some(_) => Rating::Low,
            None => Rating::Unrated,
        }
    }

    fn water_rating(&self, water_availability: &str) -> Rating {
        match water_availability.to_ascii_lowercase().as_str() {
            "high" => Rating::High,
            "medium" => Rating::Moderate,
            "low" => Rating::Low,
            _ => Rating::Unrated,
        }
    }
}

/// Profile analysis stage
#[derive(Debug, Clone, Default)]
pub struct ProfileAnalyzer<M: SuitabilityModel = BaselineSuitability> {
    model: M,
}

impl ProfileAnalyzer {
    pub fn new() -> Self {
        Self {
            model: BaselineSuitability,
        }
    }
}

impl<M: SuitabilityModel> ProfileAnalyzer<M> {
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Analyze a farmer profile against the reference history
    ///
    /// Side-effect-free and infallible for validated input.
    pub fn analyze(&self, input: &FarmerInput, history: &FarmerHistory) -> ProfileAnalysis {
        ProfileAnalysis {
            soil_suitability: self.soil_aspect(&input.soil_type, history),
            water_efficiency: self.water_aspect(&input.water_availability),
            farm_size_class: classify_farm_size(input.farm_size),
        }
    }

    fn soil_aspect(&self, soil_type: &str, history: &FarmerHistory) -> RatedAspect {
        let rating = self.model.soil_rating(soil_type, history);
        let recommendations = match rating {
            Rating::High => vec![format!(
                "{} soil has a strong sustainability record; maintain current practices",
                soil_type
            )],
            Rating::Moderate => vec![format!(
                "{} soil performs adequately; consider organic matter amendments",
                soil_type
            )],
            Rating::Low => vec![format!(
                "{} soil has a weak sustainability record; soil testing advised",
                soil_type
            )],
            Rating::Unrated => vec![format!(
                "No historical data for soil type '{}'; a local soil survey is recommended",
                soil_type
            )],
        };
        RatedAspect {
            rating,
            recommendations,
        }
    }

    fn water_aspect(&self, water_availability: &str) -> RatedAspect {
        let rating = self.model.water_rating(water_availability);
        let recommendations = match rating {
            Rating::High => vec!["Water supply supports irrigation-intensive crops".to_string()],
            Rating::Moderate => {
                vec!["Schedule irrigation around rainfall to stretch supply".to_string()]
            }
            Rating::Low => vec![
                "Prioritize drought-tolerant crops".to_string(),
                "Drip irrigation strongly recommended".to_string(),
            ],
            Rating::Unrated => vec![format!(
                "Unknown water availability '{}'; assuming average conditions",
                water_availability
            )],
        };
        RatedAspect {
            rating,
            recommendations,
        }
    }
}

/// Bucket a farm size into a scale tier with tier-specific guidance
pub fn classify_farm_size(farm_size_ha: f64) -> FarmSizeClass {
    let scale = if farm_size_ha < SMALLHOLDER_MAX_HA {
        FarmScale::Smallholder
    } else if farm_size_ha <= MID_SCALE_MAX_HA {
        FarmScale::Mid
    } else {
        FarmScale::Industrial
    };
    let recommendations = match scale {
        FarmScale::Smallholder => vec![
            "High-value crops maximize return on limited area".to_string(),
            "Intercropping can improve land utilization".to_string(),
        ],
        FarmScale::Mid => vec![
            "Crop rotation across plots reduces pest pressure".to_string(),
            "Shared machinery cooperatives lower equipment cost".to_string(),
        ],
        FarmScale::Industrial => vec![
            "Mechanized harvesting is cost-effective at this scale".to_string(),
            "Consider precision-agriculture monitoring".to_string(),
        ],
    };
    FarmSizeClass {
        scale,
        recommendations,
    }
}
