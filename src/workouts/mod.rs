//! Workout decoding, activity variants, and summary reports.

pub mod summary;
pub mod training;
pub mod types;

pub use summary::TrainingSummary;
pub use training::{Running, Swimming, Training, Walking};
pub use types::{SensorPackage, WorkoutError, WorkoutType};
