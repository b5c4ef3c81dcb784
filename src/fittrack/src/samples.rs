use fittrack_codec::{SensorPackage, WorkoutKind};

/// Readings used by `fittrack demo`, in the order they are reported.
pub const SAMPLE_PACKAGES: [(WorkoutKind, &[f64]); 3] = [
    (WorkoutKind::Swimming, &[720.0, 1.0, 80.0, 25.0, 40.0]),
    (WorkoutKind::Running, &[15000.0, 1.0, 75.0]),
    (WorkoutKind::Walking, &[9000.0, 1.0, 75.0, 180.0]),
];

pub fn sample_packages() -> Vec<SensorPackage> {
    SAMPLE_PACKAGES
        .iter()
        .map(|(kind, params)| SensorPackage::new(*kind, params.to_vec()))
        .collect()
}
