//! RustFit - Workout Statistics Engine
//!
//! Decodes raw fitness sensor packages into typed training records and
//! computes per-workout distance, mean speed, and calories burned for
//! running, sports walking, and pool swimming.

pub mod metrics;
pub mod workouts;

// Re-export commonly used types
pub use workouts::summary::TrainingSummary;
pub use workouts::training::Training;
pub use workouts::types::{SensorPackage, WorkoutError, WorkoutType};
