//! Energy model: basal metabolic rate and activity multiplier.

use crate::{ActivityProfile, EnergyResult, ExerciseSelection, ExerciseType, Frequency, Gender, SessionLength};

/// Upper bound on the activity multiplier
pub const MAX_ACTIVITY_MULTIPLIER: f64 = 2.0;

/// Base factor applied when the frequency key is not recognised
const DEFAULT_BASE_FACTOR: f64 = 1.2;

/// Basal metabolic rate (kcal/day) using the Mifflin-St Jeor equation
pub fn bmr(age_years: f64, gender: Gender, height_cm: f64, weight_kg: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

fn base_factor(frequency: &Frequency) -> f64 {
    match frequency {
        Frequency::None => 1.2,
        Frequency::Twice => 1.375,
        Frequency::ThreeToFive => 1.55,
        Frequency::Daily => 1.725,
        Frequency::Other(_) => DEFAULT_BASE_FACTOR,
    }
}

fn duration_bonus(session: &SessionLength) -> f64 {
    match session {
        SessionLength::Minutes15 => 0.05,
        SessionLength::Minutes30 => 0.1,
        SessionLength::Minutes60 => 0.15,
        SessionLength::Minutes90 => 0.2,
        SessionLength::Other(_) => 0.0,
    }
}

fn type_bonus(kind: &ExerciseType) -> f64 {
    match kind {
        ExerciseType::Home => 0.03,
        ExerciseType::Gym => 0.05,
        ExerciseType::Yoga => 0.02,
        ExerciseType::Walking => 0.04,
        ExerciseType::Other(_) => 0.0,
    }
}

/// Mean bonus over a list, or the bonus itself for a single type
fn selection_bonus(types: &ExerciseSelection) -> f64 {
    match types {
        ExerciseSelection::Many(list) if list.is_empty() => 0.0,
        ExerciseSelection::Many(list) => {
            let total = list.iter().fold(0.0, |acc, kind| acc + type_bonus(kind));
            total / list.len() as f64
        }
        ExerciseSelection::Single(kind) => type_bonus(kind),
    }
}

/// Activity multiplier applied to BMR.
///
/// Sedentary users get the bare base factor; everyone else also gets the
/// session-length and exercise-type bonuses. The result is capped at 2.0.
pub fn activity_multiplier(
    frequency: &Frequency,
    session: &SessionLength,
    types: &ExerciseSelection,
) -> f64 {
    let mut multiplier = base_factor(frequency);

    if let Frequency::Other(key) = frequency {
        tracing::warn!("Unknown exercise frequency {:?}, using base factor {}", key, DEFAULT_BASE_FACTOR);
    }

    if frequency.is_active() {
        multiplier += duration_bonus(session) + selection_bonus(types);
    }

    multiplier.min(MAX_ACTIVITY_MULTIPLIER)
}

impl EnergyResult {
    /// Compute BMR, multiplier and TDEE from converted SI inputs
    pub fn compute(
        age_years: f64,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity: &ActivityProfile,
    ) -> Self {
        let bmr_kcal = bmr(age_years, gender, height_cm, weight_kg);
        let activity_multiplier = activity_multiplier(
            &activity.frequency,
            &activity.session_minutes,
            &activity.types,
        );

        EnergyResult {
            bmr_kcal,
            activity_multiplier,
            tdee_kcal: bmr_kcal * activity_multiplier,
        }
    }
}
