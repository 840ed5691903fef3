//! Error types for the calorie_core library.

use crate::WeightUnit;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for calorie_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected before any calculation ran
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot persistence error
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// A rejected calculation request.
///
/// Rules are checked in declaration order; the first one that fails is
/// reported and nothing downstream is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid age: please enter a valid age between 1 and 120 years")]
    InvalidAge,

    #[error("missing exercise type: please select at least one exercise type")]
    MissingExerciseType,

    #[error("invalid height: please enter a valid height ({range})")]
    InvalidHeight { range: &'static str },

    #[error("invalid current weight: please enter a valid current weight ({})", weight_range(.unit))]
    InvalidCurrentWeight { unit: WeightUnit },

    #[error("invalid target weight: please enter a valid target weight ({})", weight_range(.unit))]
    InvalidTargetWeight { unit: WeightUnit },
}

impl ValidationError {
    /// Short machine-readable reason
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidAge => "invalid age",
            ValidationError::MissingExerciseType => "missing exercise type",
            ValidationError::InvalidHeight { .. } => "invalid height",
            ValidationError::InvalidCurrentWeight { .. } => "invalid current weight",
            ValidationError::InvalidTargetWeight { .. } => "invalid target weight",
        }
    }
}

fn weight_range(unit: &WeightUnit) -> &'static str {
    match unit {
        WeightUnit::Lb => "44-660 lb",
        WeightUnit::Kg => "20-300 kg",
    }
}
