use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::sa::{SaConfig, MAX_TIME_LIMIT_SECS};

/// Schedules an orchestra rehearsal using the simulated annealing algorithm.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Name of the file containing the problem instance to solve
    #[arg(value_name = "FILE")]
    pub filename: PathBuf,
    /// Time budget allocated for computation, in seconds
    #[arg(
        value_name = "SECONDS",
        value_parser = clap::value_parser!(u64).range(1..=MAX_TIME_LIMIT_SECS)
    )]
    pub time_limit: u64,
    /// Seed for the random number generator (random by default)
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn"
    )]
    pub log_level: LevelFilter,
    /// Do not draw the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn sa_config(&self) -> SaConfig {
        let config = SaConfig::default().with_time_limit(Duration::from_secs(self.time_limit));
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}
