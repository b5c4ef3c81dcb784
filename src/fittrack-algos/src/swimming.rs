use crate::{
    Effort, Training, TrainingError, error::require_positive, training::M_IN_KM,
};

/// Pool swimming. Distance comes from the pool, not from the stroke count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    effort: Effort,
    pool_length_m: f64,
    pool_lap_count: u64,
}

/// calories = (speed + 1.1) x 2 x weight x hours
impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
    /// Stroke length in metres.
    const LEN_STEP: f64 = 1.38;

    pub fn new(
        effort: Effort,
        pool_length_m: f64,
        pool_lap_count: u64,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            effort,
            pool_length_m: require_positive("pool length", pool_length_m)?,
            pool_lap_count,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub fn pool_lap_count(&self) -> u64 {
        self.pool_lap_count
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn step_length_m(&self) -> f64 {
        Self::LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        self.pool_length_m * self.pool_lap_count as f64 / M_IN_KM
    }

    fn calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.effort.weight_kg()
            * self.effort.duration_hours()
    }
}
