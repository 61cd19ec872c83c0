//! Command-line plumbing for the `orchestra-scheduler` binary.

pub mod cli;
pub mod progress;

use log::{info, LevelFilter, SetLoggerError};
use std::sync::LazyLock;
use std::time::Instant;

pub use cli::Cli;
pub use progress::ProgressBar;

/// Process start, used as the origin of log timestamps.
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Installs a `fern` logger on stderr, leaving stdout to the progress bar
/// and the result.
pub fn init_logger(level_filter: LevelFilter) -> Result<(), SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                hours,
                min,
                sec,
            );

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    info!("logger initialized at level {level_filter}");
    Ok(())
}

/// Formats an ordering as comma-separated zero-based piece indices.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::io::format_ordering;
///
/// assert_eq!(format_ordering(&[2, 0, 1]), "2,0,1");
/// ```
pub fn format_ordering(ordering: &[usize]) -> String {
    ordering
        .iter()
        .map(|piece| piece.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
