//! Read-only reference datasets
//!
//! Two historical tables loaded once at startup and shared immutably across
//! requests. Their column schema is an external contract the analyzers
//! depend on but do not define.

use serde::{Deserialize, Serialize};

/// One row of the farmer-history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerHistoryRow {
    pub location: String,
    pub soil_type: String,
    pub crop: String,
    pub yield_tons_per_ha: f64,
    pub water_usage_m3_per_ha: f64,
    /// 0-100 scale in the source data
    pub sustainability_score: f64,
}

/// One row of the market-history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketHistoryRow {
    pub location: String,
    pub crop: String,
    pub price_per_ton: f64,
    pub prior_price_per_ton: f64,
    pub cost_per_ha: f64,
    pub demand_index: f64,
    pub prior_demand_index: f64,
}

/// Historical farmer outcomes, indexed by soil type and crop
#[derive(Debug, Clone, Default)]
pub struct FarmerHistory {
    rows: Vec<FarmerHistoryRow>,
}

impl FarmerHistory {
    pub fn new(rows: Vec<FarmerHistoryRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Mean sustainability score (0-100) across rows for a soil type,
    /// or None when the soil type never appears in the history
    pub fn mean_sustainability_for_soil(&self, soil_type: &str) -> Option<f64> {
        mean(self
            .rows
            .iter()
            .filter(|r| r.soil_type.eq_ignore_ascii_case(soil_type))
            .map(|r| r.sustainability_score))
    }

    /// Mean yield for a crop, preferring rows from the given location
    pub fn mean_yield(&self, location: &str, crop: &str) -> Option<f64> {
        let local = mean(self
            .rows
            .iter()
            .filter(|r| {
                r.crop.eq_ignore_ascii_case(crop) && r.location.eq_ignore_ascii_case(location)
            })
            .map(|r| r.yield_tons_per_ha));
        local.or_else(|| {
            mean(self
                .rows
                .iter()
                .filter(|r| r.crop.eq_ignore_ascii_case(crop))
                .map(|r| r.yield_tons_per_ha))
        })
    }

    /// Distinct crop names, sorted
    pub fn crop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.crop.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

/// Historical market observations, indexed by location and crop
#[derive(Debug, Clone, Default)]
pub struct MarketHistory {
    rows: Vec<MarketHistoryRow>,
}

impl MarketHistory {
    pub fn new(rows: Vec<MarketHistoryRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Distinct crops observed at a location, sorted
    pub fn candidates_for(&self, location: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .rows
            .iter()
            .filter(|r| r.location.eq_ignore_ascii_case(location))
            .map(|r| r.crop.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Market row for a crop, preferring a location-specific observation
    pub fn row_for(&self, location: &str, crop: &str) -> Option<&MarketHistoryRow> {
        self.rows
            .iter()
            .find(|r| {
                r.crop.eq_ignore_ascii_case(crop) && r.location.eq_ignore_ascii_case(location)
            })
            .or_else(|| self.rows.iter().find(|r| r.crop.eq_ignore_ascii_case(crop)))
    }

    /// Distinct crop names across all locations, sorted
    pub fn crop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rows.iter().map(|r| r.crop.clone()).collect();
        names.sort();
        names.dedup();
        names
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
