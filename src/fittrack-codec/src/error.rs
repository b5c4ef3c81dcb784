use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CodecError {
    #[error("unrecognized activity type `{0}`, expected one of SWM, RUN, WLK")]
    UnrecognizedWorkoutType(String),
    #[error("empty sensor package")]
    EmptyPackage,
    #[error("invalid number `{value}` at parameter {position}")]
    InvalidNumber { position: usize, value: String },
    #[error("missing parameter {0}")]
    MissingParam(usize),
    #[error("parameter {position} must be a non-negative whole number, got {value}")]
    InvalidCount { position: usize, value: f64 },
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<CodecError>,
    },
}
