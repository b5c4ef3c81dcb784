use crate::{TrainingError, WorkoutSummary, error::require_positive};

pub(crate) const M_IN_KM: f64 = 1000.0;
pub(crate) const MIN_IN_HOUR: f64 = 60.0;

/// Readings shared by every activity type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effort {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Effort {
    pub fn new(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            action_count,
            duration_hours: require_positive("duration", duration_hours)?,
            weight_kg: require_positive("weight", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Distance, speed and energy formulas for one kind of workout.
///
/// Distance and speed default to the step model: `action_count` steps of
/// [`Training::step_length_m`] metres over `duration_hours`. There is no
/// default calorie formula, every activity brings its own.
pub trait Training {
    fn label(&self) -> &'static str;

    fn effort(&self) -> &Effort;

    fn step_length_m(&self) -> f64 {
        0.65
    }

    fn distance_km(&self) -> f64 {
        self.effort().action_count() as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.effort().duration_hours()
    }

    fn calories(&self) -> f64;

    fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            activity_label: self.label().to_owned(),
            duration_hours: self.effort().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories: self.calories(),
        }
    }
}
