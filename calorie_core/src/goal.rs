//! Goal planner: daily calorie target and pacing towards a goal weight.

use crate::units::{round_half_up, round_to_tenth};
use crate::{GoalResult, WeeksToGoal};
use std::fmt;

/// Assumed sustainable rate of change, used only to pace the plan
pub const SAFE_KG_PER_WEEK: f64 = 0.75;

/// Energy needed to change body mass by one kilogram
pub const KCAL_PER_KG: f64 = 7700.0;

/// Weight gaps up to this size (inclusive) get no calorie adjustment
pub const DEADBAND_KG: f64 = 0.5;

/// Plan the daily calorie target for moving from `current_weight_kg` to
/// `target_weight_kg`.
///
/// The week horizon is always derived from the raw weight gap, even inside
/// the deadband where no calorie adjustment is applied.
pub fn plan(
    bmr_kcal: f64,
    activity_multiplier: f64,
    current_weight_kg: f64,
    target_weight_kg: f64,
) -> GoalResult {
    let tdee = bmr_kcal * activity_multiplier;

    let delta = target_weight_kg - current_weight_kg;
    let weeks = delta.abs() / SAFE_KG_PER_WEEK;

    let daily_adjustment = if delta.abs() > DEADBAND_KG {
        let weekly_calorie_change = (delta * KCAL_PER_KG) / weeks;
        weekly_calorie_change / 7.0
    } else {
        0.0
    };

    let weekly_change_grams = round_to_tenth(daily_adjustment * 7.0 / KCAL_PER_KG * 1000.0);

    let weeks_to_goal = if weeks > 0.0 {
        WeeksToGoal::Weeks(weeks.ceil() as u32)
    } else {
        WeeksToGoal::Reached
    };

    GoalResult {
        daily_calories: round_half_up(tdee + daily_adjustment) as i64,
        daily_adjustment_kcal: daily_adjustment,
        weight_delta_kg: delta,
        // Normalise -0.0 so it never prints with a sign
        weekly_change_grams: weekly_change_grams + 0.0,
        weeks_to_goal,
    }
}

impl GoalResult {
    /// Weekly change such as `+750.0g/week` or `-750.0g/week`.
    ///
    /// The plus sign is only added when the goal is above the current weight.
    pub fn weekly_change_label(&self) -> String {
        if self.weight_delta_kg > 0.0 {
            format!("+{:.1}g/week", self.weekly_change_grams)
        } else {
            format!("{:.1}g/week", self.weekly_change_grams)
        }
    }

    pub fn daily_calories_label(&self) -> String {
        format!("{} calories", self.daily_calories)
    }
}

impl WeeksToGoal {
    pub fn weeks(&self) -> Option<u32> {
        match self {
            WeeksToGoal::Weeks(n) => Some(*n),
            WeeksToGoal::Reached => None,
        }
    }
}

impl fmt::Display for WeeksToGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeeksToGoal::Weeks(1) => write!(f, "1 week"),
            WeeksToGoal::Weeks(n) => write!(f, "{} weeks", n),
            WeeksToGoal::Reached => write!(f, "Goal reached"),
        }
    }
}
