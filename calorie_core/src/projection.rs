//! Week-by-week weight projection for charting.
//!
//! The series is a straight line from the current to the target weight over
//! the goal horizon, one point per week including week 0.

use crate::engine::Calculation;
use crate::units::round_to_tenth;
use crate::{Result, WeeksToGoal};
use serde::Serialize;
use std::path::Path;

/// Horizon used when the goal is already reached
pub const DEFAULT_FALLBACK_WEEKS: u32 = 12;

/// One point of the projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub week: u32,
    pub weight_kg: f64,
}

/// Linear projection `current + i * (target - current) / weeks` for
/// `i = 0..=weeks`, rounded to 0.1 kg.
///
/// A reached goal has no horizon of its own, so `fallback_weeks` is used.
pub fn weekly_projection(
    current_weight_kg: f64,
    target_weight_kg: f64,
    weeks_to_goal: WeeksToGoal,
    fallback_weeks: u32,
) -> Vec<ProjectionPoint> {
    let weeks = weeks_to_goal.weeks().unwrap_or(fallback_weeks);
    if weeks == 0 {
        return vec![ProjectionPoint {
            week: 0,
            weight_kg: round_to_tenth(current_weight_kg),
        }];
    }

    let weekly_change = (target_weight_kg - current_weight_kg) / weeks as f64;

    (0..=weeks)
        .map(|week| ProjectionPoint {
            week,
            weight_kg: round_to_tenth(current_weight_kg + weekly_change * week as f64),
        })
        .collect()
}

impl Calculation {
    /// Projection for this calculation's weights and horizon
    pub fn projection(&self, fallback_weeks: u32) -> Vec<ProjectionPoint> {
        weekly_projection(
            self.current_weight_kg,
            self.target_weight_kg,
            self.goal.weeks_to_goal,
            fallback_weeks,
        )
    }
}

/// Write the projection as CSV with a `week,weight_kg` header
pub fn write_csv(path: &Path, points: &[ProjectionPoint]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} projection points to {:?}", points.len(), path);
    Ok(())
}
