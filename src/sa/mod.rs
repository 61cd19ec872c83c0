//! Time-bounded Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with a Gibbs probability
//! that shrinks as the temperature falls. Here the temperature is a function
//! of wall-clock time rather than of an iteration counter: it follows a
//! hyperbolic-tangent S-curve from a very large value down to zero over the
//! time budget, and the search stops at the deadline.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

pub mod acceptance;
mod config;
pub mod cooling;
mod monitor;
mod runner;
mod types;

pub use acceptance::{gibbs_probability, DEFAULT_ACCEPTANCE_SCALE};
pub use config::{SaConfig, DEFAULT_INITIAL_TEMPERATURE, MAX_TIME_LIMIT_SECS};
pub use cooling::{make_schedule, HyperbolicCooling};
pub use monitor::{HistoryRecorder, NoOpObserver, ProgressObserver, SaProgress};
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
