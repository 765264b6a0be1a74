//! Training summary reports.

use serde::{Deserialize, Serialize};

use crate::workouts::training::Training;
use crate::workouts::types::WorkoutType;

/// Summary statistics for one completed training record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Activity type
    pub workout_type: WorkoutType,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned
    pub calories: f64,
}

impl TrainingSummary {
    /// Build a summary from a decoded training record.
    pub fn from_training(training: &Training) -> Self {
        Self {
            workout_type: training.workout_type(),
            duration_hours: training.duration_hours(),
            distance_km: training.distance_km(),
            mean_speed_kmh: training.mean_speed_kmh(),
            calories: training.calories(),
        }
    }
}

impl std::fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.workout_type,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
