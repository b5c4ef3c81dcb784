use crate::{
    Effort, Training, TrainingError, error::require_positive, training::MIN_IN_HOUR,
};

/// Sports walking. The calorie estimate depends on the walker's height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walking {
    effort: Effort,
    height_cm: f64,
}

/// calories = (0.035 x weight + (speed_ms^2 / height_m) x 0.029 x weight) x minutes
impl Walking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MS: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(effort: Effort, height_cm: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            effort,
            height_cm: require_positive("height", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for Walking {
    fn label(&self) -> &'static str {
        "Walking"
    }

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_IN_MS;
        let height_m = self.height_cm / Self::CM_IN_M;

        (Self::CALORIES_WEIGHT_MULTIPLIER * self.effort.weight_kg()
            + (speed_ms.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.effort.weight_kg())
            * self.effort.duration_hours()
            * MIN_IN_HOUR
    }
}
