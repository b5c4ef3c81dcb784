#[macro_use]
extern crate log;

use std::{
    io::{Read as _, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use fittrack::{
    OutputFormat,
    codec::{SensorPackage, WorkoutKind, parse_packages},
    samples::sample_packages,
    write_report,
};

#[derive(Parser)]
#[command(version, about = "Workout statistics from raw sensor packages")]
pub struct FitTrackCli {
    /// Output style for the workout summaries
    #[arg(env, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub subcommand: FitTrackCommand,
}

#[derive(Subcommand)]
pub enum FitTrackCommand {
    ///
    /// Report the built-in sample workouts
    ///
    Demo,
    ///
    /// Report a single package given on the command line, e.g. `show RUN 15000 1 75`
    ///
    Show {
        /// Activity code: SWM, RUN or WLK
        code: String,
        /// Readings in order: action count, duration (h), weight (kg), then height (cm) for
        /// WLK or pool length (m) and lap count for SWM
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
    },
    ///
    /// Report packages read one per line from a file, or from stdin
    ///
    Import {
        /// File with one `CODE v1 v2 ...` package per line; stdin when omitted
        #[arg(long, env)]
        packages_file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let env_file = dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(error) = env_file {
        debug!("No .env loaded: {}", error);
    }

    let cli = FitTrackCli::parse();

    let packages = match cli.subcommand {
        FitTrackCommand::Demo => sample_packages(),
        FitTrackCommand::Show { code, params } => {
            vec![SensorPackage::new(code.parse::<WorkoutKind>()?, params)]
        }
        FitTrackCommand::Import { packages_file } => {
            let text = match packages_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading packages from {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("reading packages from stdin")?;
                    text
                }
            };
            parse_packages(&text)?
        }
    };

    info!("Processing {} packages", packages.len());

    let mut stdout = std::io::stdout().lock();
    write_report(&packages, cli.format, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
