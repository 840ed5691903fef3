#![forbid(unsafe_code)]

//! Core domain model and calculation engine for the calorie calculator.
//!
//! This crate provides:
//! - Domain types (profiles, activity, measurements, results)
//! - Unit conversion and input validation
//! - Energy model (BMR, activity multiplier), goal and nutrition planners
//! - The calculation engine tying them together
//! - Collaborators: snapshot persistence, weight projection, text report

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod units;
pub mod validation;
pub mod energy;
pub mod goal;
pub mod nutrition;
pub mod engine;
pub mod snapshot;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result, ValidationError};
pub use types::*;
pub use config::Config;
pub use engine::{calculate, Calculation};
pub use snapshot::Snapshot;
pub use projection::{weekly_projection, ProjectionPoint};
pub use report::render_report;
