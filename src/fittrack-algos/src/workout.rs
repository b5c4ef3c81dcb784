use fittrack_codec::{ParamReader, SensorPackage, WorkoutKind};

use crate::{Effort, Running, Swimming, Training, TrainingError, Walking, WorkoutSummary};

/// A workout built from one sensor package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    Walking(Walking),
}

impl Workout {
    /// Binds `params` positionally to the constructor for `kind`.
    ///
    /// | kind | params |
    /// |------|--------|
    /// | SWM  | action_count, duration_hours, weight_kg, pool_length_m, pool_lap_count |
    /// | RUN  | action_count, duration_hours, weight_kg |
    /// | WLK  | action_count, duration_hours, weight_kg, height_cm |
    pub fn create(kind: WorkoutKind, params: &[f64]) -> Result<Self, TrainingError> {
        let expected = kind.param_count();
        if params.len() != expected {
            return Err(TrainingError::WrongArgumentCount {
                kind,
                expected,
                actual: params.len(),
            });
        }

        let mut reader = ParamReader::new(params);
        let effort = Effort::new(reader.next_count()?, reader.next_f64()?, reader.next_f64()?)?;

        let workout = match kind {
            WorkoutKind::Swimming => Self::Swimming(Swimming::new(
                effort,
                reader.next_f64()?,
                reader.next_count()?,
            )?),
            WorkoutKind::Running => Self::Running(Running::new(effort)),
            WorkoutKind::Walking => Self::Walking(Walking::new(effort, reader.next_f64()?)?),
        };
        debug_assert_eq!(reader.remaining(), 0);

        trace!("Created {} from {:?}", workout.label(), params);
        Ok(workout)
    }

    pub fn from_package(package: &SensorPackage) -> Result<Self, TrainingError> {
        Self::create(package.kind, &package.params)
    }

    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Swimming(_) => WorkoutKind::Swimming,
            Workout::Running(_) => WorkoutKind::Running,
            Workout::Walking(_) => WorkoutKind::Walking,
        }
    }

    fn training(&self) -> &dyn Training {
        match self {
            Workout::Swimming(swimming) => swimming,
            Workout::Running(running) => running,
            Workout::Walking(walking) => walking,
        }
    }
}

impl Training for Workout {
    fn label(&self) -> &'static str {
        self.training().label()
    }

    fn effort(&self) -> &Effort {
        self.training().effort()
    }

    fn step_length_m(&self) -> f64 {
        self.training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.training().mean_speed_kmh()
    }

    fn calories(&self) -> f64 {
        self.training().calories()
    }

    fn summary(&self) -> WorkoutSummary {
        self.training().summary()
    }
}

/// Dispatches a raw activity code and its readings.
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout, TrainingError> {
    Workout::create(code.parse::<WorkoutKind>()?, params)
}

#[cfg(test)]
mod tests {
    use fittrack_codec::CodecError;
    use rand::Rng;

    use super::*;

    #[test]
    fn dispatch_each_kind() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swimming.kind(), WorkoutKind::Swimming);
        assert_eq!(swimming.label(), "Swimming");

        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running.kind(), WorkoutKind::Running);
        assert_eq!(running.label(), "Running");

        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walking.kind(), WorkoutKind::Walking);
        assert_eq!(walking.label(), "Walking");
    }

    #[test]
    fn binds_params_positionally() {
        let workout = read_package("SWM", &[720.0, 1.5, 80.0, 25.0, 40.0]).unwrap();
        let Workout::Swimming(swimming) = workout else {
            panic!("expected swimming, got {workout:?}");
        };
        assert_eq!(swimming.effort().action_count(), 720);
        assert_eq!(swimming.effort().duration_hours(), 1.5);
        assert_eq!(swimming.effort().weight_kg(), 80.0);
        assert_eq!(swimming.pool_length_m(), 25.0);
        assert_eq!(swimming.pool_lap_count(), 40);
    }

    #[test]
    fn unrecognized_code() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::UnrecognizedActivityType(CodecError::UnrecognizedWorkoutType(
                "XYZ".into()
            ))
        );
        let message = err.to_string();
        assert!(message.contains("unrecognized activity type"));
        assert!(message.contains("SWM, RUN, WLK"));
    }

    #[test]
    fn wrong_argument_count() {
        let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::WrongArgumentCount {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "wrong argument count for RUN: expected 3, got 2"
        );

        assert!(matches!(
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]),
            Err(TrainingError::WrongArgumentCount { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn non_positive_duration() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: non-positive duration (0)");
    }

    #[test]
    fn non_positive_height() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, -1.0]).unwrap_err();
        assert!(err.to_string().starts_with("invalid input: non-positive height"));
    }

    #[test]
    fn step_length_per_kind() {
        let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(swimming.step_length_m(), 1.38);
        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(running.step_length_m(), 0.65);
        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(walking.step_length_m(), 0.65);
    }

    #[test]
    fn rejected_inputs_never_yield_a_workout() {
        let rejected: [(&str, &[f64]); 8] = [
            ("RUN", &[15000.0, 0.0, 75.0]),
            ("RUN", &[15000.0, -1.0, 75.0]),
            ("RUN", &[15000.0, f64::INFINITY, 75.0]),
            ("RUN", &[15000.0, 1.0, 0.0]),
            ("WLK", &[9000.0, 1.0, 75.0, 0.0]),
            ("WLK", &[9000.0, f64::NAN, 75.0, 180.0]),
            ("SWM", &[720.0, 1.0, 80.0, -25.0, 40.0]),
            ("SWM", &[-720.0, 1.0, 80.0, 25.0, 40.0]),
        ];

        for (code, params) in rejected {
            assert!(read_package(code, params).is_err(), "{code} {params:?}");
        }
    }

    #[test]
    fn dispatched_workout_stays_finite() {
        for (code, params) in [
            ("SWM", vec![720.0, 0.01, 80.0, 25.0, 40.0]),
            ("RUN", vec![15000.0, 0.01, 75.0]),
            ("WLK", vec![9000.0, 0.01, 75.0, 1.0]),
        ] {
            let summary = read_package(code, &params).unwrap().summary();
            assert!(summary.duration_hours > 0.0);
            assert!(summary.mean_speed_kmh.is_finite());
            assert!(summary.calories.is_finite());
        }
    }

    #[test]
    fn fractional_lap_count() {
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
            Err(TrainingError::InvalidParam(CodecError::InvalidCount { position: 5, .. }))
        ));
    }

    #[test]
    fn from_package_matches_read_package() {
        let package = SensorPackage::new(WorkoutKind::Running, vec![15000.0, 1.0, 75.0]);
        assert_eq!(
            Workout::from_package(&package),
            read_package("RUN", &[15000.0, 1.0, 75.0])
        );
    }

    #[test]
    fn delegates_to_variant() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let Workout::Walking(walking) = workout else {
            panic!("expected walking");
        };
        assert_eq!(workout.summary(), walking.summary());
    }

    #[test]
    fn distance_never_negative() {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let kind = WorkoutKind::ALL[rng.random_range(0..WorkoutKind::ALL.len())];
            let mut params = vec![
                rng.random_range(0..50_000_u32) as f64,
                rng.random_range(0.01..5.0),
                rng.random_range(30.0..150.0),
            ];
            match kind {
                WorkoutKind::Swimming => {
                    params.push(rng.random_range(10.0..100.0));
                    params.push(rng.random_range(0..200_u32) as f64);
                }
                WorkoutKind::Walking => params.push(rng.random_range(120.0..220.0)),
                WorkoutKind::Running => {}
            }

            let workout = Workout::create(kind, &params).unwrap();
            assert!(workout.distance_km() >= 0.0);
            assert!(workout.mean_speed_kmh() >= 0.0);
            assert!(workout.calories() >= 0.0);
        }
    }
}
