//! Calculation engine.
//!
//! Runs a request through validation, unit conversion, the energy model and
//! both planners, returning one consolidated result:
//! 1. Validate the raw request (nothing else runs on failure)
//! 2. Convert height and weights to cm and kg
//! 3. BMR, activity multiplier, TDEE
//! 4. Calorie target and pacing
//! 5. Macro and micronutrient targets

use crate::{
    goal, nutrition, validation, CalculationRequest, EnergyResult, GoalResult, NutritionResult,
    ValidationError,
};
use serde::{Deserialize, Serialize};

/// Complete result bundle for one request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub request: CalculationRequest,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub energy: EnergyResult,
    pub goal: GoalResult,
    pub nutrition: NutritionResult,
}

/// Run a full calculation.
///
/// Either every result is produced or the first validation failure is
/// returned; there is no partial result.
pub fn calculate(request: &CalculationRequest) -> Result<Calculation, ValidationError> {
    if let Err(e) = validation::validate(request) {
        tracing::warn!("Rejected calculation request: {}", e);
        return Err(e);
    }

    let profile = &request.profile;
    let height_cm = profile.height.to_cm();
    let current_weight_kg = profile.current_weight.to_kg();
    let target_weight_kg = profile.target_weight.to_kg();

    let energy = EnergyResult::compute(
        profile.age_years,
        profile.gender,
        height_cm,
        current_weight_kg,
        &request.activity,
    );
    tracing::debug!(
        "BMR {:.1} kcal, multiplier {:.3}, TDEE {:.1} kcal",
        energy.bmr_kcal,
        energy.activity_multiplier,
        energy.tdee_kcal
    );

    let goal = goal::plan(
        energy.bmr_kcal,
        energy.activity_multiplier,
        current_weight_kg,
        target_weight_kg,
    );
    tracing::debug!(
        "Goal: {} kcal/day ({:+.1} kcal adjustment), {}",
        goal.daily_calories,
        goal.daily_adjustment_kcal,
        goal.weeks_to_goal
    );

    let nutrition = nutrition::plan(
        goal.daily_calories,
        current_weight_kg,
        &request.activity.frequency,
    );

    Ok(Calculation {
        request: request.clone(),
        height_cm,
        current_weight_kg,
        target_weight_kg,
        energy,
        goal,
        nutrition,
    })
}
