mod error;
pub use error::CodecError;

mod workout_kind;
pub use workout_kind::WorkoutKind;

mod package;
pub use package::{SensorPackage, parse_packages};

mod helpers;
pub use helpers::ParamReader;
