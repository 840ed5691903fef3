//! Unit conversion between imperial input and the SI units used internally.

use crate::{HeightUnit, WeightUnit};

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

const INCHES_PER_FOOT: f64 = 12.0;

/// Convert a height to centimeters.
///
/// Imperial heights use `feet` and `inches` and ignore `value`; metric
/// heights pass `value` through unchanged.
pub fn height_to_cm(unit: HeightUnit, value: f64, feet: f64, inches: f64) -> f64 {
    match unit {
        HeightUnit::FtIn => (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH,
        HeightUnit::Cm => value,
    }
}

/// Convert a weight to kilograms
pub fn weight_to_kg(unit: WeightUnit, value: f64) -> f64 {
    match unit {
        WeightUnit::Lb => value * KG_PER_LB,
        WeightUnit::Kg => value,
    }
}

/// Split centimeters into whole feet and fractional inches
pub fn cm_to_feet_inches(cm: f64) -> (f64, f64) {
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    (feet, total_inches - feet * INCHES_PER_FOOT)
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Round to the nearest integer with ties going towards positive infinity.
///
/// `f64::round` sends ties away from zero, which differs for negative
/// halves (-2.5 becomes -3 rather than -2).
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round half-up to one decimal place
pub fn round_to_tenth(x: f64) -> f64 {
    round_half_up(x * 10.0) / 10.0
}
