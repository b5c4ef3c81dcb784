use std::io::Write;

use clap::ValueEnum;
use fittrack_algos::{Training, Workout};
use fittrack_codec::SensorPackage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human readable line per workout
    #[default]
    Text,
    /// One JSON object per workout
    Json,
}

/// Writes one line per package, in input order. Stops at the first package that
/// can't be turned into a workout.
pub fn write_report<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    writer: &mut W,
) -> anyhow::Result<()> {
    debug!("Reporting {} packages", packages.len());

    for package in packages {
        let workout = Workout::from_package(package)
            .map_err(|error| anyhow::anyhow!("package `{}`: {}", package, error))?;
        let summary = workout.summary();

        match format {
            OutputFormat::Text => writeln!(writer, "{}", summary)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, &summary)?;
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}
