#[macro_use]
extern crate log;

mod error;
pub use error::TrainingError;

pub(crate) mod training;
pub use training::{Effort, Training};

pub(crate) mod running;
pub use running::Running;

pub(crate) mod walking;
pub use walking::Walking;

pub(crate) mod swimming;
pub use swimming::Swimming;

pub(crate) mod workout;
pub use workout::{Workout, read_package};

pub(crate) mod summary;
pub use summary::WorkoutSummary;
