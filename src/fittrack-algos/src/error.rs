use fittrack_codec::{CodecError, WorkoutKind};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrainingError {
    #[error(transparent)]
    UnrecognizedActivityType(CodecError),
    #[error("wrong argument count for {kind}: expected {expected}, got {actual}")]
    WrongArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },
    #[error("invalid input: non-positive {field} ({value})")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("invalid input: {0}")]
    InvalidParam(CodecError),
}

impl From<CodecError> for TrainingError {
    fn from(value: CodecError) -> Self {
        match value {
            CodecError::UnrecognizedWorkoutType(_) => Self::UnrecognizedActivityType(value),
            other => Self::InvalidParam(other),
        }
    }
}

/// Fails unless `value` is a finite number above zero.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, TrainingError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput { field, value })
    }
}
