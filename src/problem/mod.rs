//! Problem instances for orchestra rehearsal scheduling.
//!
//! A [`ProblemInstance`] holds everything the cost model needs: the length
//! of every piece, which solist plays in which piece, and what each solist
//! is paid per unit of time. Instances are immutable once built, either
//! directly through [`ProblemInstance::new`] or from the plain-text format
//! handled by [`loader`].

mod error;
pub mod loader;
mod types;

pub use error::ProblemError;
pub use loader::{load, parse};
pub use types::ProblemInstance;
