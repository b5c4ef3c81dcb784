#[macro_use]
extern crate log;

pub mod report;
pub use report::{OutputFormat, write_report};

pub mod samples;

pub use fittrack_algos as algos;
pub use fittrack_codec as codec;
