//! Tests for the market analysis stage

use shared::{
    FarmerHistory, FarmerHistoryRow, MarketAnalyzer, MarketHistory, MarketHistoryRow, Trend,
};

fn market_row(
    location: &str,
    crop: &str,
    price: f64,
    prior_price: f64,
    cost: f64,
    demand: f64,
    prior_demand: f64,
) -> MarketHistoryRow {
    MarketHistoryRow {
        location: location.into(),
        crop: crop.into(),
        price_per_ton: price,
        prior_price_per_ton: prior_price,
        cost_per_ha: cost,
        demand_index: demand,
        prior_demand_index: prior_demand,
    }
}

fn market() -> MarketHistory {
    MarketHistory::new(vec![
        market_row("X", "Wheat", 220.0, 200.0, 300.0, 110.0, 100.0),
        market_row("X", "Rice", 180.0, 185.0, 400.0, 95.0, 100.0),
        market_row("X", "Barley", 150.0, 150.0, 250.0, 100.0, 100.0),
        market_row("Y", "Sorghum", 130.0, 120.0, 200.0, 80.0, 70.0),
    ])
}

fn farmers() -> FarmerHistory {
    FarmerHistory::new(vec![FarmerHistoryRow {
        location: "X".into(),
        soil_type: "loam".into(),
        crop: "Wheat".into(),
        yield_tons_per_ha: 3.0,
        water_usage_m3_per_ha: 1200.0,
        sustainability_score: 80.0,
    }])
}

mod candidate_derivation {
    use super::*;

    #[test]
    fn empty_candidates_derive_from_location() {
        let analysis = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
        let crops: Vec<&String> = analysis.profitability.keys().collect();
        assert_eq!(crops, vec!["Barley", "Rice", "Wheat"]);
    }

    #[test]
    fn unknown_location_yields_empty_analysis() {
        let analysis = MarketAnalyzer::new().analyze("nowhere", &[], &market(), &farmers());
        assert!(analysis.is_empty());
    }

    #[test]
    fn supplied_candidates_are_respected() {
        let candidates = vec!["Wheat".to_string(), "Rice".to_string()];
        let analysis = MarketAnalyzer::new().analyze("X", &candidates, &market(), &farmers());
        assert_eq!(analysis.profitability.len(), 2);
        assert!(analysis.profitability.contains_key("Wheat"));
        assert!(analysis.profitability.contains_key("Rice"));
    }

    #[test]
    fn candidates_without_market_rows_are_dropped() {
        let candidates = vec!["Wheat".to_string(), "Moonfruit".to_string()];
        let analysis = MarketAnalyzer::new().analyze("X", &candidates, &market(), &farmers());
        assert_eq!(analysis.profitability.len(), 1);
        assert!(!analysis.profitability.contains_key("Moonfruit"));
    }

    #[test]
    fn candidate_from_another_location_falls_back() {
        // Sorghum only has a row for Y; a farmer in X asking for it still
        // gets the crop-wide observation
        let candidates = vec!["Sorghum".to_string()];
        let analysis = MarketAnalyzer::new().analyze("X", &candidates, &market(), &farmers());
        assert!(analysis.profitability.contains_key("Sorghum"));
    }
}

mod trends {
    use super::*;

    #[test]
    fn every_resolved_candidate_has_both_trends() {
        let analysis = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
        for crop in analysis.profitability.keys() {
            assert!(analysis.demand_trends.contains_key(crop), "demand for {}", crop);
            assert!(analysis.price_trends.contains_key(crop), "price for {}", crop);
        }
    }

    #[test]
    fn trend_directions_follow_the_index_movement() {
        let analysis = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
        assert_eq!(analysis.demand_trends["Wheat"], Trend::Rising);
        assert_eq!(analysis.demand_trends["Rice"], Trend::Declining);
        assert_eq!(analysis.demand_trends["Barley"], Trend::Flat);
        assert_eq!(analysis.price_trends["Wheat"], Trend::Rising);
        assert_eq!(analysis.price_trends["Barley"], Trend::Flat);
    }

    #[test]
    fn small_movements_inside_the_band_are_flat() {
        // 1% move on a 100 index stays inside the 2% flat band
        let rows = MarketHistory::new(vec![market_row(
            "X", "Oats", 100.0, 100.0, 50.0, 101.0, 100.0,
        )]);
        let analysis = MarketAnalyzer::new().analyze("X", &[], &rows, &farmers());
        assert_eq!(analysis.demand_trends["Oats"], Trend::Flat);
    }
}

mod profitability {
    use super::*;

    #[test]
    fn scores_are_normalized_into_unit_range() {
        let analysis = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
        for (crop, score) in &analysis.profitability {
            assert!(
                (0.0..=1.0).contains(score),
                "{} score {} out of range",
                crop,
                score
            );
        }
    }

    #[test]
    fn best_margin_scores_one_and_worst_scores_zero() {
        let analysis = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
        let max = analysis.profitability.values().cloned().fold(f64::MIN, f64::max);
        let min = analysis.profitability.values().cloned().fold(f64::MAX, f64::min);
        assert_eq!(max, 1.0);
        assert_eq!(min, 0.0);
    }

    #[test]
    fn single_positive_margin_candidate_scores_one() {
        let rows = MarketHistory::new(vec![market_row(
            "X", "Wheat", 300.0, 280.0, 100.0, 120.0, 100.0,
        )]);
        let analysis = MarketAnalyzer::new().analyze("X", &[], &rows, &farmers());
        assert_eq!(analysis.profitability["Wheat"], 1.0);
    }

    #[test]
    fn single_negative_margin_candidate_scores_zero() {
        let rows = MarketHistory::new(vec![market_row(
            "X", "Wheat", 10.0, 12.0, 5000.0, 80.0, 100.0,
        )]);
        let analysis = MarketAnalyzer::new().analyze("X", &[], &rows, &farmers());
        assert_eq!(analysis.profitability["Wheat"], 0.0);
    }

    #[test]
    fn identical_margins_share_the_same_score() {
        let rows = MarketHistory::new(vec![
            market_row("X", "Oats", 200.0, 200.0, 100.0, 100.0, 100.0),
            market_row("X", "Rye", 200.0, 200.0, 100.0, 100.0, 100.0),
        ]);
        let analysis = MarketAnalyzer::new().analyze("X", &[], &rows, &FarmerHistory::default());
        assert_eq!(
            analysis.profitability["Oats"],
            analysis.profitability["Rye"]
        );
    }
}

#[test]
fn analysis_is_deterministic() {
    let a = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
    let b = MarketAnalyzer::new().analyze("X", &[], &market(), &farmers());
    assert_eq!(a.profitability, b.profitability);
    assert_eq!(a.demand_trends, b.demand_trends);
    assert_eq!(a.price_trends, b.price_trends);
}
