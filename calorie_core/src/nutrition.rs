//! Nutrition planner: macro and micronutrient targets for a calorie budget.

use crate::units::{round_half_up, round_to_tenth};
use crate::{Frequency, NutritionResult};

/// Recommended daily sodium ceiling, independent of inputs
pub const SODIUM_MG: u32 = 2300;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const WATER_LITERS_PER_KG: f64 = 0.035;

/// Split `daily_calories` into macros for a person weighing `weight_kg`.
///
/// Protein is set per kilogram of body weight, carbs as a share of the
/// budget, and fat takes whatever is left. Fat is not clamped at zero.
pub fn plan(daily_calories: i64, weight_kg: f64, frequency: &Frequency) -> NutritionResult {
    let active = frequency.is_active();
    let calories = daily_calories as f64;

    let protein_per_kg = if active { 1.6 } else { 0.8 };
    let protein_grams = round_half_up(weight_kg * protein_per_kg);
    let protein_kcal = protein_grams * KCAL_PER_GRAM_PROTEIN;

    let carb_share = if active { 0.50 } else { 0.45 };
    let carb_kcal = calories * carb_share;
    let carb_grams = round_half_up(carb_kcal / KCAL_PER_GRAM_CARB);

    let fat_kcal = calories - protein_kcal - carb_kcal;
    let fat_grams = round_half_up(fat_kcal / KCAL_PER_GRAM_FAT);

    if fat_grams < 0.0 {
        tracing::warn!(
            "Protein and carbs exceed {} kcal, fat target is {}g",
            daily_calories,
            fat_grams
        );
    }

    NutritionResult {
        protein_grams: protein_grams as i64,
        protein_kcal: protein_kcal as i64,
        carb_grams: carb_grams as i64,
        carb_kcal,
        fat_grams: fat_grams as i64,
        fat_kcal,
        fiber_grams: round_half_up(calories / 100.0) as i64,
        water_liters: round_to_tenth(weight_kg * WATER_LITERS_PER_KG),
        sodium_mg: SODIUM_MG,
    }
}

impl NutritionResult {
    pub fn protein_label(&self) -> String {
        format!("{}g ({} cal)", self.protein_grams, self.protein_kcal)
    }

    pub fn carbs_label(&self) -> String {
        format!("{}g ({} cal)", self.carb_grams, round_half_up(self.carb_kcal))
    }

    pub fn fats_label(&self) -> String {
        format!("{}g ({} cal)", self.fat_grams, round_half_up(self.fat_kcal))
    }

    pub fn fiber_label(&self) -> String {
        format!("{}g", self.fiber_grams)
    }

    pub fn water_label(&self) -> String {
        format!("{}L", self.water_liters)
    }

    pub fn sodium_label(&self) -> String {
        format!("{}mg", self.sodium_mg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_split() {
        let nutrition = plan(2201, 80.0, &Frequency::ThreeToFive);

        assert_eq!(nutrition.protein_grams, 128);
        assert_eq!(nutrition.protein_kcal, 512);
        assert_eq!(nutrition.carb_kcal, 1100.5);
        assert_eq!(nutrition.carb_grams, 275);
        assert_eq!(nutrition.fat_kcal, 588.5);
        assert_eq!(nutrition.fat_grams, 65);
        assert_eq!(nutrition.fiber_grams, 22);
        assert_eq!(nutrition.water_liters, 2.8);
        assert_eq!(nutrition.sodium_mg, 2300);
    }

    #[test]
    fn test_sedentary_split() {
        let nutrition = plan(2000, 70.0, &Frequency::None);

        assert_eq!(nutrition.protein_grams, 56);
        assert_eq!(nutrition.carb_kcal, 900.0);
        assert_eq!(nutrition.carb_grams, 225);
        assert_eq!(nutrition.fat_kcal, 2000.0 - 224.0 - 900.0);
        assert_eq!(nutrition.fat_grams, 97);
        assert_eq!(nutrition.water_liters, 2.5);
    }

    #[test]
    fn test_unknown_frequency_counts_as_active() {
        let nutrition = plan(2000, 70.0, &Frequency::from("weekends"));
        assert_eq!(nutrition.protein_grams, 112);
        assert_eq!(nutrition.carb_kcal, 1000.0);
    }

    #[test]
    fn test_fat_goes_negative_without_clamping() {
        // 240g protein (960 kcal) + 500 kcal carbs against a 1000 kcal budget
        let nutrition = plan(1000, 150.0, &Frequency::Daily);

        assert_eq!(nutrition.fat_kcal, -460.0);
        assert_eq!(nutrition.fat_grams, -51);
        assert_eq!(nutrition.fats_label(), "-51g (-460 cal)");
    }

    #[test]
    fn test_labels() {
        let nutrition = plan(2201, 80.0, &Frequency::ThreeToFive);

        assert_eq!(nutrition.protein_label(), "128g (512 cal)");
        assert_eq!(nutrition.carbs_label(), "275g (1101 cal)");
        assert_eq!(nutrition.fats_label(), "65g (589 cal)");
        assert_eq!(nutrition.fiber_label(), "22g");
        assert_eq!(nutrition.water_label(), "2.8L");
        assert_eq!(nutrition.sodium_label(), "2300mg");
    }

    #[test]
    fn test_sodium_is_constant() {
        assert_eq!(plan(1200, 45.0, &Frequency::None).sodium_mg, SODIUM_MG);
        assert_eq!(plan(4000, 140.0, &Frequency::Daily).sodium_mg, SODIUM_MG);
    }
}
