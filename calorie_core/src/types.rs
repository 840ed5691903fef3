//! Core domain types for the calorie calculator.
//!
//! This module defines the records that flow through the engine:
//! - Measurements (height, weight) tagged with their input unit
//! - User and activity profiles making up a calculation request
//! - Derived energy, goal and nutrition results

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Units and Measurements
// ============================================================================

/// Unit a height was entered in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "cm")]
    Cm,
    #[serde(rename = "ft_in")]
    FtIn,
}

/// Unit a weight was entered in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lb => write!(f, "lb"),
        }
    }
}

/// Height as entered, before conversion to centimeters
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "unit")]
pub enum Height {
    #[serde(rename = "cm")]
    Centimeters { value: f64 },
    #[serde(rename = "ft_in")]
    FeetInches { feet: f64, inches: f64 },
}

impl Height {
    /// Height in centimeters (no range checking)
    pub fn to_cm(&self) -> f64 {
        match *self {
            Height::Centimeters { value } => {
                crate::units::height_to_cm(HeightUnit::Cm, value, 0.0, 0.0)
            }
            Height::FeetInches { feet, inches } => {
                crate::units::height_to_cm(HeightUnit::FtIn, 0.0, feet, inches)
            }
        }
    }
}

/// Body weight as entered, before conversion to kilograms
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn kg(value: f64) -> Self {
        Self { value, unit: WeightUnit::Kg }
    }

    pub fn lb(value: f64) -> Self {
        Self { value, unit: WeightUnit::Lb }
    }

    /// Weight in kilograms (no range checking)
    pub fn to_kg(&self) -> f64 {
        crate::units::weight_to_kg(self.unit, self.value)
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Only two sexes are modelled by the BMR formula
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Biometric part of a request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age_years: f64,
    pub gender: Gender,
    pub height: Height,
    pub current_weight: Weight,
    pub target_weight: Weight,
}

/// How often the user exercises.
///
/// Keys outside the known set are kept as `Other` and fall back to the
/// sedentary base factor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    None,
    Twice,
    ThreeToFive,
    Daily,
    Other(String),
}

impl Frequency {
    pub fn key(&self) -> &str {
        match self {
            Frequency::None => "none",
            Frequency::Twice => "twice",
            Frequency::ThreeToFive => "3-5",
            Frequency::Daily => "7",
            Frequency::Other(key) => key,
        }
    }

    /// Anything other than `none` counts as active, including unknown keys
    pub fn is_active(&self) -> bool {
        !matches!(self, Frequency::None)
    }
}

impl From<&str> for Frequency {
    fn from(key: &str) -> Self {
        match key {
            "none" => Frequency::None,
            "twice" => Frequency::Twice,
            "3-5" => Frequency::ThreeToFive,
            "7" => Frequency::Daily,
            other => Frequency::Other(other.to_string()),
        }
    }
}

impl From<String> for Frequency {
    fn from(key: String) -> Self {
        Frequency::from(key.as_str())
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.key().to_string()
    }
}

/// Length of a typical exercise session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum SessionLength {
    Minutes15,
    Minutes30,
    Minutes60,
    Minutes90,
    Other(String),
}

impl SessionLength {
    pub fn key(&self) -> &str {
        match self {
            SessionLength::Minutes15 => "15",
            SessionLength::Minutes30 => "30",
            SessionLength::Minutes60 => "60",
            SessionLength::Minutes90 => "90",
            SessionLength::Other(key) => key,
        }
    }
}

impl From<&str> for SessionLength {
    fn from(key: &str) -> Self {
        match key {
            "15" => SessionLength::Minutes15,
            "30" => SessionLength::Minutes30,
            "60" => SessionLength::Minutes60,
            "90" => SessionLength::Minutes90,
            other => SessionLength::Other(other.to_string()),
        }
    }
}

impl From<String> for SessionLength {
    fn from(key: String) -> Self {
        SessionLength::from(key.as_str())
    }
}

impl From<SessionLength> for String {
    fn from(length: SessionLength) -> Self {
        length.key().to_string()
    }
}

/// Kind of exercise performed
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ExerciseType {
    Home,
    Gym,
    Yoga,
    Walking,
    Other(String),
}

impl ExerciseType {
    pub fn key(&self) -> &str {
        match self {
            ExerciseType::Home => "home",
            ExerciseType::Gym => "gym",
            ExerciseType::Yoga => "yoga",
            ExerciseType::Walking => "walking",
            ExerciseType::Other(key) => key,
        }
    }
}

impl From<&str> for ExerciseType {
    fn from(key: &str) -> Self {
        match key {
            "home" => ExerciseType::Home,
            "gym" => ExerciseType::Gym,
            "yoga" => ExerciseType::Yoga,
            "walking" => ExerciseType::Walking,
            other => ExerciseType::Other(other.to_string()),
        }
    }
}

impl From<String> for ExerciseType {
    fn from(key: String) -> Self {
        ExerciseType::from(key.as_str())
    }
}

impl From<ExerciseType> for String {
    fn from(kind: ExerciseType) -> Self {
        kind.key().to_string()
    }
}

/// Selected exercise types.
///
/// Older snapshots may carry a single type instead of a list, so both
/// shapes deserialize.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExerciseSelection {
    Many(Vec<ExerciseType>),
    Single(ExerciseType),
}

impl Default for ExerciseSelection {
    fn default() -> Self {
        ExerciseSelection::Many(Vec::new())
    }
}

impl ExerciseSelection {
    /// True when nothing usable was selected (empty list or blank key)
    pub fn is_empty(&self) -> bool {
        match self {
            ExerciseSelection::Many(types) => types.is_empty(),
            ExerciseSelection::Single(kind) => kind.key().is_empty(),
        }
    }

    pub fn types(&self) -> Vec<&ExerciseType> {
        match self {
            ExerciseSelection::Many(types) => types.iter().collect(),
            ExerciseSelection::Single(kind) => vec![kind],
        }
    }
}

/// Activity part of a request
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProfile {
    pub frequency: Frequency,
    pub session_minutes: SessionLength,
    #[serde(default)]
    pub types: ExerciseSelection,
}

/// Everything the engine needs for one calculation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CalculationRequest {
    pub profile: UserProfile,
    pub activity: ActivityProfile,
}

// ============================================================================
// Results
// ============================================================================

/// Energy expenditure figures
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyResult {
    pub bmr_kcal: f64,
    pub activity_multiplier: f64,
    pub tdee_kcal: f64,
}

/// Estimated horizon to the target weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WeeksToGoal {
    Weeks(u32),
    Reached,
}

/// Calorie target and pacing towards the goal weight
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalResult {
    pub daily_calories: i64,
    pub daily_adjustment_kcal: f64,
    pub weight_delta_kg: f64,
    pub weekly_change_grams: f64,
    pub weeks_to_goal: WeeksToGoal,
}

/// Daily macro and micronutrient targets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub protein_grams: i64,
    pub protein_kcal: i64,
    pub carb_grams: i64,
    pub carb_kcal: f64,
    /// Not clamped: negative when protein and carbs exceed the calorie budget
    pub fat_grams: i64,
    pub fat_kcal: f64,
    pub fiber_grams: i64,
    pub water_liters: f64,
    pub sodium_mg: u32,
}
