//! Common types used across the advisor

use serde::{Deserialize, Serialize};

/// Qualitative rating produced by the profile analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    High,
    Moderate,
    Low,
    /// Unknown categorical input degrades here instead of erroring
    Unrated,
}

impl Rating {
    /// Map the rating onto a normalized score in [0, 1]
    pub fn score(&self) -> f64 {
        match self {
            Rating::High => 0.9,
            Rating::Moderate => 0.6,
            Rating::Low => 0.3,
            Rating::Unrated => 0.5,
        }
    }
}

/// Direction of a market time series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Flat,
    Declining,
}

/// Farm size tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FarmScale {
    Smallholder,
    Mid,
    Industrial,
}

impl FarmScale {
    pub fn label(&self) -> &'static str {
        match self {
            FarmScale::Smallholder => "smallholder",
            FarmScale::Mid => "mid-scale",
            FarmScale::Industrial => "industrial",
        }
    }
}

/// Clamp a computed score into the normalized [0, 1] range
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_scores_are_normalized() {
        for rating in [Rating::High, Rating::Moderate, Rating::Low, Rating::Unrated] {
            let s = rating.score();
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn scale_labels() {
        assert_eq!(FarmScale::Smallholder.label(), "smallholder");
        assert_eq!(FarmScale::Mid.label(), "mid-scale");
        assert_eq!(FarmScale::Industrial.label(), "industrial");
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(clamp_unit(-0.5), 0.0);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(0.42), 0.42);
    }

    proptest::proptest! {
        #[test]
        fn clamp_unit_always_lands_in_range(v in -100.0f64..100.0) {
            let c = clamp_unit(v);
            proptest::prop_assert!((0.0..=1.0).contains(&c));
        }
    }
}
