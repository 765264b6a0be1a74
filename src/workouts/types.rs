//! Workout types, raw sensor packages, and decode errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workouts::training::Training;

/// Supported workout activity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Pool swimming
    Swimming,
    /// Running
    Running,
    /// Sports walking
    Walking,
}

impl WorkoutType {
    /// Resolve a sensor package code. Codes are exact and case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "SWM" => Some(WorkoutType::Swimming),
            "RUN" => Some(WorkoutType::Running),
            "WLK" => Some(WorkoutType::Walking),
            _ => None,
        }
    }

    /// The wire code the sensor unit sends for this workout type.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutType::Swimming => "SWM",
            WorkoutType::Running => "RUN",
            WorkoutType::Walking => "WLK",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Swimming => write!(f, "Swimming"),
            WorkoutType::Running => write!(f, "Running"),
            WorkoutType::Walking => write!(f, "Sports Walking"),
        }
    }
}

/// One raw record from the sensor unit: an activity code plus the
/// positional numeric readings for that activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Activity code ("SWM", "RUN" or "WLK")
    pub workout_type: String,
    /// Positional sensor readings
    pub values: Vec<f64>,
}

impl SensorPackage {
    /// Create a package from an activity code and its readings.
    pub fn new(workout_type: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            values,
        }
    }

    /// Decode this package into a typed training record.
    pub fn decode(&self) -> Result<Training, WorkoutError> {
        Training::from_package(&self.workout_type, &self.values)
    }
}

/// Errors while decoding sensor packages.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Activity code matches none of the supported workout types
    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// Package carries the wrong number of readings for its activity
    #[error("Wrong sensor value count for {workout_type}: expected {expected}, got {got}")]
    WrongValueCount {
        workout_type: WorkoutType,
        expected: usize,
        got: usize,
    },

    /// A reading is outside its valid domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        assert_eq!(WorkoutType::from_code("SWM"), Some(WorkoutType::Swimming));
        assert_eq!(WorkoutType::from_code("RUN"), Some(WorkoutType::Running));
        assert_eq!(WorkoutType::from_code("WLK"), Some(WorkoutType::Walking));
        assert_eq!(WorkoutType::from_code("FLY"), None);
        // Codes are case-sensitive
        assert_eq!(WorkoutType::from_code("swm"), None);
    }

    #[test]
    fn test_code_round_trip() {
        for workout_type in [
            WorkoutType::Swimming,
            WorkoutType::Running,
            WorkoutType::Walking,
        ] {
            assert_eq!(WorkoutType::from_code(workout_type.code()), Some(workout_type));
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(WorkoutType::Swimming.to_string(), "Swimming");
        assert_eq!(WorkoutType::Running.to_string(), "Running");
        assert_eq!(WorkoutType::Walking.to_string(), "Sports Walking");
    }

    #[test]
    fn test_error_messages() {
        let err = WorkoutError::UnknownWorkoutType("FLY".to_string());
        assert_eq!(err.to_string(), "Unknown workout type: FLY");

        let err = WorkoutError::WrongValueCount {
            workout_type: WorkoutType::Swimming,
            expected: 5,
            got: 3,
        };
        assert_eq!(
            err.to_string(),
            "Wrong sensor value count for Swimming: expected 5, got 3"
        );
    }
}
