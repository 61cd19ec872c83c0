//! Orchestra rehearsal scheduling by time-bounded simulated annealing.
//!
//! Given which solists play in which pieces, how long every piece lasts and
//! what each solist is paid, find an order of the pieces that keeps the
//! wages of solists waiting between their appearances as low as possible.
//!
//! - [`problem`]: the immutable instance and its plain-text loader.
//! - [`rehearsal`]: the state space (random orderings, swap neighbors) and
//!   the wait-time cost model.
//! - [`sa`]: a domain-agnostic Simulated Annealing runner whose temperature
//!   follows the wall clock and which stops at a hard deadline.
//! - [`io`]: the command-line surface, logger setup and progress bar used
//!   by the `orchestra-scheduler` binary.
//!
//! # Examples
//!
//! ```
//! use orchestra_scheduler::problem;
//! use orchestra_scheduler::sa::{SaConfig, SaRunner};
//! use std::time::Duration;
//!
//! let problem = problem::parse("2 3\n1 0 1 10\n0 1 0 20\n5 6 7\n").unwrap();
//! let config = SaConfig::default()
//!     .with_time_limit(Duration::from_millis(50))
//!     .with_seed(42);
//!
//! let result = SaRunner::run(&problem, &config);
//! assert_eq!(result.best.len(), 3);
//! assert_eq!(result.best_cost, 0.0);
//! ```

pub mod io;
pub mod problem;
pub mod rehearsal;
pub mod sa;
