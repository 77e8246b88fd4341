//! Tests for the profile analysis stage
//!
//! Verifies that analysis always populates all three sub-fields and that
//! unknown categorical values degrade instead of erroring.

use shared::{
    classify_farm_size, FarmScale, FarmerHistory, FarmerHistoryRow, FarmerInput, ProfileAnalyzer,
    Rating,
};

fn history() -> FarmerHistory {
    FarmerHistory::new(vec![
        FarmerHistoryRow {
            location: "X".into(),
            soil_type: "loam".into(),
            crop: "Wheat".into(),
            yield_tons_per_ha: 3.0,
            water_usage_m3_per_ha: 1200.0,
            sustainability_score: 82.0,
        },
        FarmerHistoryRow {
            location: "X".into(),
            soil_type: "clay".into(),
            crop: "Rice".into(),
            yield_tons_per_ha: 4.0,
            water_usage_m3_per_ha: 2200.0,
            sustainability_score: 45.0,
        },
        FarmerHistoryRow {
            location: "Y".into(),
            soil_type: "sandy".into(),
            crop: "Millet".into(),
            yield_tons_per_ha: 1.5,
            water_usage_m3_per_ha: 700.0,
            sustainability_score: 30.0,
        },
    ])
}

fn input(soil: &str, water: &str, farm_size: f64) -> FarmerInput {
    FarmerInput {
        name: "A".into(),
        location: "X".into(),
        farm_size,
        soil_type: soil.into(),
        water_availability: water.into(),
        preferred_crops: vec![],
        budget: 1000.0,
    }
}

mod soil_suitability {
    use super::*;

    #[test]
    fn high_sustainability_soil_rates_high() {
        let analysis = ProfileAnalyzer::new().analyze(&input("loam", "medium", 10.0), &history());
        assert_eq!(analysis.soil_suitability.rating, Rating::High);
        assert!(!analysis.soil_suitability.recommendations.is_empty());
    }

    #[test]
    fn moderate_sustainability_soil_rates_moderate() {
        let analysis = ProfileAnalyzer::new().analyze(&input("clay", "medium", 10.0), &history());
        assert_eq!(analysis.soil_suitability.rating, Rating::Moderate);
    }

    #[test]
    fn low_sustainability_soil_rates_low() {
        let analysis = ProfileAnalyzer::new().analyze(&input("sandy", "medium", 10.0), &history());
        assert_eq!(analysis.soil_suitability.rating, Rating::Low);
    }

    #[test]
    fn unknown_soil_type_degrades_to_unrated() {
        let analysis =
            ProfileAnalyzer::new().analyze(&input("volcanic-glass", "medium", 10.0), &history());
        assert_eq!(analysis.soil_suitability.rating, Rating::Unrated);
        // Degradation still carries guidance, not an error
        assert!(!analysis.soil_suitability.recommendations.is_empty());
    }

    #[test]
    fn soil_matching_is_case_insensitive() {
        let analysis = ProfileAnalyzer::new().analyze(&input("Loam", "medium", 10.0), &history());
        assert_eq!(analysis.soil_suitability.rating, Rating::High);
    }
}

mod water_efficiency {
    use super::*;

    #[test]
    fn declared_levels_map_to_ratings() {
        let analyzer = ProfileAnalyzer::new();
        let h = history();
        assert_eq!(
            analyzer.analyze(&input("loam", "high", 10.0), &h).water_efficiency.rating,
            Rating::High
        );
        assert_eq!(
            analyzer.analyze(&input("loam", "medium", 10.0), &h).water_efficiency.rating,
            Rating::Moderate
        );
        assert_eq!(
            analyzer.analyze(&input("loam", "low", 10.0), &h).water_efficiency.rating,
            Rating::Low
        );
    }

    #[test]
    fn unknown_availability_degrades_to_unrated() {
        let analysis =
            ProfileAnalyzer::new().analyze(&input("loam", "sometimes", 10.0), &history());
        assert_eq!(analysis.water_efficiency.rating, Rating::Unrated);
    }

    #[test]
    fn scarce_water_guidance_mentions_drought_tolerance() {
        let analysis = ProfileAnalyzer::new().analyze(&input("loam", "low", 10.0), &history());
        assert!(analysis
            .water_efficiency
            .recommendations
            .iter()
            .any(|r| r.contains("drought")));
    }
}

mod farm_size {
    use super::*;

    #[test]
    fn size_tiers() {
        assert_eq!(classify_farm_size(1.0).scale, FarmScale::Smallholder);
        assert_eq!(classify_farm_size(4.99).scale, FarmScale::Smallholder);
        assert_eq!(classify_farm_size(5.0).scale, FarmScale::Mid);
        assert_eq!(classify_farm_size(50.0).scale, FarmScale::Mid);
        assert_eq!(classify_farm_size(50.01).scale, FarmScale::Industrial);
    }

    #[test]
    fn every_tier_carries_guidance() {
        for size in [1.0, 20.0, 200.0] {
            assert!(!classify_farm_size(size).recommendations.is_empty());
        }
    }
}

#[test]
fn analysis_populates_all_sub_fields_even_on_empty_history() {
    let analysis = ProfileAnalyzer::new().analyze(
        &input("loam", "medium", 10.0),
        &FarmerHistory::default(),
    );
    assert_eq!(analysis.soil_suitability.rating, Rating::Unrated);
    assert_eq!(analysis.water_efficiency.rating, Rating::Moderate);
    assert!(!analysis.farm_size_class.recommendations.is_empty());
}
