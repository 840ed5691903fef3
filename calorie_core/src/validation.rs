//! Input validation for calculation requests.
//!
//! Checks run against the raw (pre-conversion) request in a fixed priority
//! order and stop at the first failure:
//! 1. Age range
//! 2. Exercise type required when active
//! 3. Height range in the unit it was entered in
//! 4. Converted height range
//! 5. Converted current weight range
//! 6. Converted target weight range

use crate::{CalculationRequest, Height, ValidationError};
use std::ops::RangeInclusive;

pub const AGE_YEARS: RangeInclusive<f64> = 1.0..=120.0;
pub const HEIGHT_CM: RangeInclusive<f64> = 50.0..=250.0;
pub const HEIGHT_FEET: RangeInclusive<f64> = 2.0..=8.0;
pub const WEIGHT_KG: RangeInclusive<f64> = 20.0..=300.0;

const METRIC_HEIGHT_RANGE: &str = "50-250 cm";
const IMPERIAL_HEIGHT_RANGE: &str = "2-8 feet, 0-11 inches";

/// Validate a request before any calculation runs.
///
/// Range checks go through `contains`, so a NaN anywhere fails the rule
/// that inspects it.
pub fn validate(request: &CalculationRequest) -> Result<(), ValidationError> {
    let profile = &request.profile;
    let activity = &request.activity;

    if !AGE_YEARS.contains(&profile.age_years) {
        return Err(ValidationError::InvalidAge);
    }

    if activity.frequency.is_active() && activity.types.is_empty() {
        return Err(ValidationError::MissingExerciseType);
    }

    match profile.height {
        Height::FeetInches { feet, inches } => {
            if !HEIGHT_FEET.contains(&feet) || !(0.0..12.0).contains(&inches) {
                return Err(ValidationError::InvalidHeight {
                    range: IMPERIAL_HEIGHT_RANGE,
                });
            }
        }
        Height::Centimeters { value } => {
            if !HEIGHT_CM.contains(&value) {
                return Err(ValidationError::InvalidHeight {
                    range: METRIC_HEIGHT_RANGE,
                });
            }
        }
    }

    // Imperial bounds admit 2 ft 0 in (60.96 cm) to 8 ft 11.9 in, so this
    // only trips on the upper end.
    if !HEIGHT_CM.contains(&profile.height.to_cm()) {
        return Err(ValidationError::InvalidHeight {
            range: METRIC_HEIGHT_RANGE,
        });
    }

    if !WEIGHT_KG.contains(&profile.current_weight.to_kg()) {
        return Err(ValidationError::InvalidCurrentWeight {
            unit: profile.current_weight.unit,
        });
    }

    if !WEIGHT_KG.contains(&profile.target_weight.to_kg()) {
        return Err(ValidationError::InvalidTargetWeight {
            unit: profile.target_weight.unit,
        });
    }

    Ok(())
}
