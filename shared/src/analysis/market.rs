//! Market trend analysis
//!
//! For each candidate crop, derives demand and price trends from the
//! market-history dataset and a normalized profitability score from the
//! margin between expected revenue and cost to produce. An empty candidate
//! list means "open to suggestion": the set is derived from the dataset
//! filtered by location. This stage never errors; a location with no data
//! yields an empty analysis, which the synthesizer rejects as insufficient.

use std::collections::BTreeMap;

use crate::datasets::{FarmerHistory, MarketHistory, MarketHistoryRow};
use crate::models::MarketAnalysis;
use crate::types::{clamp_unit, Trend};

/// Relative band within which an index movement counts as flat
const FLAT_BAND: f64 = 0.02;

/// Yield assumed when a crop has no farmer-history rows at all
const DEFAULT_YIELD_T_PER_HA: f64 = 2.5;

/// Margins closer together than this are treated as identical
const MARGIN_EPSILON: f64 = 1e-9;

/// Pluggable trend/margin strategy for the market stage
pub trait MarketModel {
    fn trend(&self, current: f64, prior: f64) -> Trend;
    fn margin_per_ha(&self, row: &MarketHistoryRow, typical_yield_t_per_ha: f64) -> f64;
}

/// Baseline strategy: sign-of-delta trends with a flat band, margin as
/// revenue minus cost per hectare
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineMarket;

impl MarketModel for BaselineMarket {
    fn trend(&self, current: f64, prior: f64) -> Trend {
        let band = FLAT_BAND * prior.abs();
        let delta = current - prior;
        if delta > band {
            Trend::Rising
        } else if delta < -band {
            Trend::Declining
        } else {
            Trend::Flat
        }
    }

    fn margin_per_ha(&self, row: &MarketHistoryRow, typical_yield_t_per_ha: f64) -> f64 {
        row.price_per_ton * typical_yield_t_per_ha - row.cost_per_ha
    }
}

/// Market analysis stage
#[derive(Debug, Clone, Default)]
pub struct MarketAnalyzer<M: MarketModel = BaselineMarket> {
    model: M,
}

impl MarketAnalyzer {
    pub fn new() -> Self {
        Self {
            model: BaselineMarket,
        }
    }
}

impl<M: MarketModel> MarketAnalyzer<M> {
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Analyze candidate crops for a location
    ///
    /// Candidates that have no market observation anywhere are dropped.
    /// Crop keys in the result use the dataset's canonical spelling so they
    /// resolve against the crops reference table at persistence time.
    pub fn analyze(
        &self,
        location: &str,
        candidates: &[String],
        market: &MarketHistory,
        history: &FarmerHistory,
    ) -> MarketAnalysis {
        let candidates = if candidates.is_empty() {
            market.candidates_for(location)
        } else {
            candidates.to_vec()
        };

        let mut demand_trends = BTreeMap::new();
        let mut price_trends = BTreeMap::new();
        let mut margins: BTreeMap<String, f64> = BTreeMap::new();

        for candidate in &candidates {
            let Some(row) = market.row_for(location, candidate) else {
                continue;
            };
            let crop = row.crop.clone();
            let typical_yield = history
                .mean_yield(location, &crop)
                .unwrap_or(DEFAULT_YIELD_T_PER_HA);

            demand_trends.insert(
                crop.clone(),
                self.model.trend(row.demand_index, row.prior_demand_index),
            );
            price_trends.insert(
                crop.clone(),
                self.model.trend(row.price_per_ton, row.prior_price_per_ton),
            );
            margins.insert(crop, self.model.margin_per_ha(row, typical_yield));
        }

        MarketAnalysis {
            demand_trends,
            price_trends,
            profitability: normalize_margins(&margins),
        }
    }
}

/// Min-max normalize margins into [0, 1]
///
/// When all margins are identical the relative scale collapses; in that
/// case a positive margin maps to 1.0 and a non-positive one to 0.0.
fn normalize_margins(margins: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &m in margins.values() {
        min = min.min(m);
        max = max.max(m);
    }
    let spread = max - min;

    margins
        .iter()
        .map(|(crop, &m)| {
            let score = if spread < MARGIN_EPSILON {
                if m > 0.0 {
                    1.0
                } else {
                    0.0
                }
            } else {
                (m - min) / spread
            };
            (crop.clone(), clamp_unit(score))
        })
        .collect()
}
