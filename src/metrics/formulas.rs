//! Shared metric formulas and unit constants.
//!
//! Every activity variant derives its distance from an action count and a
//! fixed step (or stroke) length, and its mean speed from distance over
//! duration. Swimming substitutes a pool-based speed formula in
//! `crate::workouts::training`; everything else goes through here.

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Conversion factor from km/h to m/s.
pub const KMH_TO_MS: f64 = 0.278;

/// Distance in kilometers covered by a number of steps or strokes.
pub fn distance_km(action_count: u32, step_length_m: f64) -> f64 {
    action_count as f64 * step_length_m / METERS_PER_KM
}

/// Mean speed in km/h over the recorded duration.
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    distance_km / duration_hours
}

/// Convert a speed in km/h to m/s.
pub fn kmh_to_ms(speed_kmh: f64) -> f64 {
    speed_kmh * KMH_TO_MS
}

/// Workout duration in minutes.
pub fn duration_minutes(duration_hours: f64) -> f64 {
    duration_hours * MINUTES_PER_HOUR
}
