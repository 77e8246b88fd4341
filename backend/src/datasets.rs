//! Reference dataset loading
//!
//! The two CSV tables are read once at startup and never mutated. A missing
//! file degrades to an empty table with a warning so the service can still
//! start; requests against an empty market table surface as insufficient
//! data rather than a crash.

use std::path::Path;

use anyhow::Context;

use shared::{FarmerHistory, FarmerHistoryRow, MarketHistory, MarketHistoryRow};

/// Load the farmer-history table from CSV
pub fn load_farmer_history(path: impl AsRef<Path>) -> anyhow::Result<FarmerHistory> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Farmer history dataset not found at {}; starting with an empty table",
            path.display()
        );
        return Ok(FarmerHistory::default());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening farmer history dataset {}", path.display()))?;
    let mut rows: Vec<FarmerHistoryRow> = Vec::new();
    for record in reader.deserialize() {
        let row: FarmerHistoryRow =
            record.with_context(|| format!("parsing farmer history row {}", rows.len() + 1))?;
        rows.push(row);
    }
    Ok(FarmerHistory::new(rows))
}

/// Load the market-history table from CSV
pub fn load_market_history(path: impl AsRef<Path>) -> anyhow::Result<MarketHistory> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Market history dataset not found at {}; starting with an empty table",
            path.display()
        );
        return Ok(MarketHistory::default());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening market history dataset {}", path.display()))?;
    let mut rows: Vec<MarketHistoryRow> = Vec::new();
    for record in reader.deserialize() {
        let row: MarketHistoryRow =
            record.with_context(|| format!("parsing market history row {}", rows.len() + 1))?;
        rows.push(row);
    }
    Ok(MarketHistory::new(rows))
}
