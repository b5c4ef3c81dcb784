use crate::{
    Effort, Training,
    training::{M_IN_KM, MIN_IN_HOUR},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    effort: Effort,
}

/// calories = (18 x speed + 1.79) x weight / 1000 x minutes
impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 1.79;

    pub fn new(effort: Effort) -> Self {
        Self { effort }
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn effort(&self) -> &Effort {
        &self.effort
    }

    fn calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::CALORIES_SPEED_SHIFT)
            * self.effort.weight_kg()
            / M_IN_KM
            * self.effort.duration_hours()
            * MIN_IN_HOUR
    }
}
