//! Plain-text report of a calculation.

use crate::engine::Calculation;
use crate::{ExerciseSelection, ExerciseType, Frequency, Gender, Height, SessionLength};
use chrono::NaiveDate;
use std::fmt::Write;

pub fn frequency_label(frequency: &Frequency) -> &str {
    match frequency {
        Frequency::None => "None",
        Frequency::Twice => "Twice a week",
        Frequency::ThreeToFive => "3-5 times a week",
        Frequency::Daily => "7 days",
        Frequency::Other(key) => key,
    }
}

pub fn session_label(session: &SessionLength) -> &str {
    match session {
        SessionLength::Minutes15 => "15 minutes",
        SessionLength::Minutes30 => "30 minutes",
        SessionLength::Minutes60 => "1 hour",
        SessionLength::Minutes90 => "More than 1 hour",
        SessionLength::Other(key) => key,
    }
}

pub fn exercise_type_label(kind: &ExerciseType) -> &str {
    match kind {
        ExerciseType::Home => "Home workout",
        ExerciseType::Gym => "Gym workout",
        ExerciseType::Yoga => "Yoga",
        ExerciseType::Walking => "Walking",
        ExerciseType::Other(key) => key,
    }
}

fn selection_label(types: &ExerciseSelection) -> String {
    types
        .types()
        .into_iter()
        .map(exercise_type_label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn height_label(height: &Height) -> String {
    match height {
        Height::Centimeters { value } => format!("{} cm", value),
        Height::FeetInches { feet, inches } => format!("{}' {}\"", feet, inches),
    }
}

/// Render the report sections followed by a "Generated on" footer
pub fn render_report(calculation: &Calculation, generated_on: NaiveDate) -> String {
    let profile = &calculation.request.profile;
    let activity = &calculation.request.activity;
    let goal = &calculation.goal;
    let nutrition = &calculation.nutrition;

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "Health Calorie Tracker Report");
    let _ = writeln!(out, "=============================");

    let _ = writeln!(out, "\nPersonal Information");
    let _ = writeln!(out, "  Age: {} years", profile.age_years);
    let _ = writeln!(
        out,
        "  Gender: {}",
        match profile.gender {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    );
    let _ = writeln!(out, "  Height: {}", height_label(&profile.height));
    let _ = writeln!(
        out,
        "  Current Weight: {} {}",
        profile.current_weight.value, profile.current_weight.unit
    );
    let _ = writeln!(
        out,
        "  Target Weight: {} {}",
        profile.target_weight.value, profile.target_weight.unit
    );

    let _ = writeln!(out, "\nExercise Information");
    let _ = writeln!(out, "  Frequency: {}", frequency_label(&activity.frequency));
    let _ = writeln!(out, "  Duration: {}", session_label(&activity.session_minutes));
    let _ = writeln!(out, "  Type: {}", selection_label(&activity.types));

    let _ = writeln!(out, "\nCalorie Requirements");
    let _ = writeln!(out, "  Daily Calories Needed: {}", goal.daily_calories_label());
    let _ = writeln!(out, "  Weekly Weight Change: {}", goal.weekly_change_label());
    let _ = writeln!(out, "  Estimated Time to Goal: {}", goal.weeks_to_goal);
    let _ = writeln!(
        out,
        "  Basal Metabolic Rate (BMR): {} calories",
        crate::units::round_half_up(calculation.energy.bmr_kcal)
    );

    let _ = writeln!(out, "\nDaily Nutrition Requirements");
    let _ = writeln!(out, "  Protein: {}", nutrition.protein_label());
    let _ = writeln!(out, "  Carbohydrates: {}", nutrition.carbs_label());
    let _ = writeln!(out, "  Fats: {}", nutrition.fats_label());
    let _ = writeln!(out, "  Fiber: {}", nutrition.fiber_label());
    let _ = writeln!(out, "  Water: {}", nutrition.water_label());
    let _ = writeln!(out, "  Sodium: {}", nutrition.sodium_label());

    let _ = writeln!(out, "\nGenerated on: {}", generated_on.format("%Y-%m-%d"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{calculate, ActivityProfile, CalculationRequest, UserProfile, Weight};

    fn create_test_calculation() -> Calculation {
        let request = CalculationRequest {
            profile: UserProfile {
                age_years: 30.0,
                gender: Gender::Male,
                height: Height::FeetInches { feet: 5.0, inches: 11.0 },
                current_weight: Weight::lb(176.0),
                target_weight: Weight::lb(165.0),
            },
            activity: ActivityProfile {
                frequency: Frequency::ThreeToFive,
                session_minutes: SessionLength::Minutes60,
                types: ExerciseSelection::Many(vec![ExerciseType::Gym, ExerciseType::from("rowing")]),
            },
        };
        calculate(&request).unwrap()
    }

    #[test]
    fn test_report_sections() {
        let calculation = create_test_calculation();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let report = render_report(&calculation, date);

        for heading in [
            "Personal Information",
            "Exercise Information",
            "Calorie Requirements",
            "Daily Nutrition Requirements",
        ] {
            assert!(report.contains(heading), "missing {}", heading);
        }
        assert!(report.contains("Height: 5' 11\""));
        assert!(report.contains("Current Weight: 176 lb"));
        assert!(report.contains("Frequency: 3-5 times a week"));
        assert!(report.contains("Duration: 1 hour"));
        assert!(report.contains("Type: Gym workout, rowing"));
        assert!(report.contains(&format!(
            "Daily Calories Needed: {} calories",
            calculation.goal.daily_calories
        )));
        assert!(report.contains("Sodium: 2300mg"));
        assert!(report.ends_with("Generated on: 2026-10-19\n"));
    }

    #[test]
    fn test_labels_echo_unknown_keys() {
        assert_eq!(frequency_label(&Frequency::from("sometimes")), "sometimes");
        assert_eq!(session_label(&SessionLength::from("45")), "45");
        assert_eq!(exercise_type_label(&ExerciseType::Walking), "Walking");
    }
}
