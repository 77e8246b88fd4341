//! Validation utilities for the Sustainable Farming Advisor
//!
//! Malformed FarmerInput is rejected here, before the pipeline runs.
//! Unknown categorical values (soil type, water availability) are NOT
//! rejected; the analyzers degrade them to unrated classifications.

use crate::models::FarmerInput;

/// Validate a farmer profile before pipeline entry
pub fn validate_farmer_input(input: &FarmerInput) -> Result<(), &'static str> {
    if input.name.trim().is_empty() {
        return Err("Farmer name must not be empty");
    }
    if input.location.trim().is_empty() {
        return Err("Location must not be empty");
    }
    if !input.farm_size.is_finite() || input.farm_size <= 0.0 {
        return Err("Farm size must be a positive number of hectares");
    }
    if !input.budget.is_finite() || input.budget <= 0.0 {
        return Err("Budget must be a positive amount");
    }
    if input.preferred_crops.iter().any(|c| c.trim().is_empty()) {
        return Err("Preferred crop names must not be empty");
    }
    Ok(())
}
