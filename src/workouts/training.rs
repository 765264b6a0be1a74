//! Activity variants and their statistic formulas.
//!
//! Each variant carries the constants of its own calorie model. Distance
//! and mean speed come from the shared formulas in `crate::metrics`,
//! except that swimming derives mean speed from pool length and lap count
//! instead of stroke count.

use crate::metrics::formulas;
use crate::workouts::summary::TrainingSummary;
use crate::workouts::types::{WorkoutError, WorkoutType};

/// Reject non-positive readings that are used as divisors.
fn positive(value: f64, field: &'static str) -> Result<f64, WorkoutError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidValue { field, value })
    }
}

/// Training: running.
#[derive(Debug, Clone)]
pub struct Running {
    /// Number of steps taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Mean speed in km/h, fixed at construction
    mean_speed_kmh: f64,
}

impl Running {
    /// Distance covered by a single step in meters.
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Calorie coefficient on mean speed.
    const SPEED_MULTIPLIER: f64 = 18.0;
    /// Calorie speed shift term.
    const SPEED_SHIFT: f64 = 1.79;

    /// Create a running record from raw sensor readings.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, WorkoutError> {
        let duration_hours = positive(duration_hours, "duration_hours")?;
        let distance_km = formulas::distance_km(action_count, Self::STEP_LENGTH_M);

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            mean_speed_kmh: formulas::mean_speed_kmh(distance_km, duration_hours),
        })
    }

    fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        if values.len() != 3 {
            return Err(WorkoutError::WrongValueCount {
                workout_type: WorkoutType::Running,
                expected: 3,
                got: values.len(),
            });
        }

        Self::new(values[0] as u32, values[1], values[2])
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action_count, Self::STEP_LENGTH_M)
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned over the workout.
    pub fn calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh + Self::SPEED_SHIFT) * self.weight_kg
            / formulas::METERS_PER_KM
            * formulas::duration_minutes(self.duration_hours)
    }
}

/// Training: sports walking.
#[derive(Debug, Clone)]
pub struct Walking {
    /// Number of steps taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in meters (sensors report centimeters)
    pub height_m: f64,
    /// Mean speed in km/h, fixed at construction
    mean_speed_kmh: f64,
}

impl Walking {
    /// Distance covered by a single step in meters.
    pub const STEP_LENGTH_M: f64 = 0.65;
    /// Centimeters in one meter.
    const CM_PER_M: f64 = 100.0;
    /// Calorie coefficient on weight.
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Calorie coefficient on squared speed over height.
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// Create a walking record from raw sensor readings.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let duration_hours = positive(duration_hours, "duration_hours")?;
        let height_m = positive(height_cm, "height_cm")? / Self::CM_PER_M;
        let distance_km = formulas::distance_km(action_count, Self::STEP_LENGTH_M);

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            height_m,
            mean_speed_kmh: formulas::mean_speed_kmh(distance_km, duration_hours),
        })
    }

    fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        if values.len() != 4 {
            return Err(WorkoutError::WrongValueCount {
                workout_type: WorkoutType::Walking,
                expected: 4,
                got: values.len(),
            });
        }

        Self::new(values[0] as u32, values[1], values[2], values[3])
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action_count, Self::STEP_LENGTH_M)
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned over the workout.
    pub fn calories(&self) -> f64 {
        let speed_ms = formulas::kmh_to_ms(self.mean_speed_kmh);

        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_ms.powi(2) / self.height_m * Self::SPEED_HEIGHT_MULTIPLIER * self.weight_kg)
            * formulas::duration_minutes(self.duration_hours)
    }
}

/// Training: pool swimming.
#[derive(Debug, Clone)]
pub struct Swimming {
    /// Number of strokes taken
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of completed pool laps
    pub pool_lap_count: u32,
    /// Mean speed in km/h, fixed at construction
    mean_speed_kmh: f64,
}

impl Swimming {
    /// Distance covered by a single stroke in meters.
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Calorie speed shift term.
    const SPEED_SHIFT: f64 = 1.1;
    /// Calorie coefficient on weight.
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    /// Create a swimming record from raw sensor readings.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        let duration_hours = positive(duration_hours, "duration_hours")?;
        // Pool-based mean speed, independent of stroke count.
        let mean_speed_kmh =
            pool_length_m * pool_lap_count as f64 / formulas::METERS_PER_KM / duration_hours;

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count,
            mean_speed_kmh,
        })
    }

    fn from_values(values: &[f64]) -> Result<Self, WorkoutError> {
        if values.len() != 5 {
            return Err(WorkoutError::WrongValueCount {
                workout_type: WorkoutType::Swimming,
                expected: 5,
                got: values.len(),
            });
        }

        Self::new(
            values[0] as u32,
            values[1],
            values[2],
            values[3],
            values[4] as u32,
        )
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        formulas::distance_km(self.action_count, Self::STROKE_LENGTH_M)
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    /// Calories burned over the workout.
    pub fn calories(&self) -> f64 {
        (self.mean_speed_kmh + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours
    }
}

/// A decoded training record, one variant per supported activity.
#[derive(Debug, Clone)]
pub enum Training {
    /// Pool swimming
    Swimming(Swimming),
    /// Running
    Running(Running),
    /// Sports walking
    Walking(Walking),
}

impl Training {
    /// Decode a raw sensor package into a training record.
    ///
    /// The activity code selects the variant; the variant's constructor
    /// checks the reading count and value domains itself.
    pub fn from_package(code: &str, values: &[f64]) -> Result<Self, WorkoutError> {
        match WorkoutType::from_code(code) {
            Some(WorkoutType::Swimming) => Ok(Training::Swimming(Swimming::from_values(values)?)),
            Some(WorkoutType::Running) => Ok(Training::Running(Running::from_values(values)?)),
            Some(WorkoutType::Walking) => Ok(Training::Walking(Walking::from_values(values)?)),
            None => Err(WorkoutError::UnknownWorkoutType(code.to_string())),
        }
    }

    /// The activity type of this record.
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Training::Swimming(_) => WorkoutType::Swimming,
            Training::Running(_) => WorkoutType::Running,
            Training::Walking(_) => WorkoutType::Walking,
        }
    }

    /// Workout duration in hours.
    pub fn duration_hours(&self) -> f64 {
        match self {
            Training::Swimming(swimming) => swimming.duration_hours,
            Training::Running(running) => running.duration_hours,
            Training::Walking(walking) => walking.duration_hours,
        }
    }

    /// Distance covered in kilometers.
    pub fn distance_km(&self) -> f64 {
        match self {
            Training::Swimming(swimming) => swimming.distance_km(),
            Training::Running(running) => running.distance_km(),
            Training::Walking(walking) => walking.distance_km(),
        }
    }

    /// Mean speed in km/h, fixed at construction.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Training::Swimming(swimming) => swimming.mean_speed_kmh(),
            Training::Running(running) => running.mean_speed_kmh(),
            Training::Walking(walking) => walking.mean_speed_kmh(),
        }
    }

    /// Calories burned over the workout.
    pub fn calories(&self) -> f64 {
        match self {
            Training::Swimming(swimming) => swimming.calories(),
            Training::Running(running) => running.calories(),
            Training::Walking(walking) => walking.calories(),
        }
    }

    /// Build the summary report for this record.
    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary::from_training(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_running_statistics() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();

        assert!((running.distance_km() - 9.75).abs() < EPS);
        assert!((running.mean_speed_kmh() - 9.75).abs() < EPS);
        assert!((running.calories() - 797.805).abs() < EPS);
    }

    #[test]
    fn test_walking_statistics() {
        let walking = Walking::new(9000, 1.0, 75.0, 180.0).unwrap();

        assert!((walking.distance_km() - 5.85).abs() < EPS);
        assert!((walking.mean_speed_kmh() - 5.85).abs() < EPS);
        assert!((walking.calories() - 349.251_747_525).abs() < EPS);
    }

    #[test]
    fn test_swimming_statistics() {
        let swimming = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();

        assert!((swimming.distance_km() - 0.9936).abs() < EPS);
        assert!((swimming.mean_speed_kmh() - 1.0).abs() < EPS);
        assert!((swimming.calories() - 336.0).abs() < EPS);
    }

    #[test]
    fn test_swimming_speed_ignores_stroke_count() {
        let few_strokes = Swimming::new(100, 1.0, 80.0, 25.0, 40).unwrap();
        let many_strokes = Swimming::new(2000, 1.0, 80.0, 25.0, 40).unwrap();

        assert_eq!(few_strokes.mean_speed_kmh(), many_strokes.mean_speed_kmh());
        // Distance still follows stroke count
        assert!(few_strokes.distance_km() < many_strokes.distance_km());
    }

    #[test]
    fn test_mean_speed_stable_across_calls() {
        let running = Running::new(15000, 1.0, 75.0).unwrap();

        let first = running.mean_speed_kmh();
        let second = running.mean_speed_kmh();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_dispatch_round_trip() {
        let training = Training::from_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();

        match training {
            Training::Running(running) => {
                assert_eq!(running.action_count, 15000);
                assert!((running.duration_hours - 1.0).abs() < EPS);
                assert!((running.weight_kg - 75.0).abs() < EPS);
            }
            other => panic!("expected a running record, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = Training::from_package("FLY", &[1.0, 2.0, 3.0]).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::UnknownWorkoutType(code) if code == "FLY"
        ));
    }

    #[test]
    fn test_wrong_value_count_rejected() {
        let err = Training::from_package("RUN", &[15000.0, 1.0]).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::WrongValueCount {
                workout_type: WorkoutType::Running,
                expected: 3,
                got: 2,
            }
        ));
    }

    #[test]
    fn test_non_positive_duration_rejected() {
        let err = Running::new(15000, 0.0, 75.0).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::InvalidValue {
                field: "duration_hours",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = Walking::new(9000, 1.0, 75.0, 0.0).unwrap_err();

        assert!(matches!(
            err,
            WorkoutError::InvalidValue {
                field: "height_cm",
                ..
            }
        ));
    }
}
