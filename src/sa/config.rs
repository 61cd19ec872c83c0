//! SA configuration.

use super::acceptance::DEFAULT_ACCEPTANCE_SCALE;
use std::time::Duration;

/// Default starting temperature.
///
/// Stands in for "infinity": it only has to dwarf the largest energy
/// difference the search will see, so that every move is accepted at the
/// start of the run.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1e18;

/// Longest accepted `time_limit`, in seconds.
pub const MAX_TIME_LIMIT_SECS: u64 = u32::MAX as u64;

/// Configuration for the time-bounded Simulated Annealing runner.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::sa::SaConfig;
/// use std::time::Duration;
///
/// let config = SaConfig::default()
///     .with_time_limit(Duration::from_secs(10))
///     .with_initial_temperature(1e12)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Total wall-clock budget for the run.
    pub time_limit: Duration,

    /// Fraction of `time_limit` spent in the search loop, in (0, 1].
    ///
    /// The rest is left for loading and printing around the search.
    pub compute_fraction: f64,

    /// Temperature at the start of the run.
    pub initial_temperature: f64,

    /// Temperature reached at the deadline. Must be below the initial one.
    pub final_temperature: f64,

    /// Scaling constant `K` of the Gibbs acceptance probability
    /// `exp(K * (e_current - e_candidate) / T)`.
    pub acceptance_scale: f64,

    /// Minimum wall-clock interval between two progress reports.
    pub report_interval: Duration,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            compute_fraction: 0.95,
            initial_temperature: DEFAULT_INITIAL_TEMPERATURE,
            final_temperature: 0.0,
            acceptance_scale: DEFAULT_ACCEPTANCE_SCALE,
            report_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_compute_fraction(mut self, fraction: f64) -> Self {
        self.compute_fraction = fraction;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    pub fn with_acceptance_scale(mut self, k: f64) -> Self {
        self.acceptance_scale = k;
        self
    }

    pub fn with_report_interval(mut self, interval: Duration) -> Self {
        self.report_interval = interval;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Wall-clock time the search loop may run: `compute_fraction * time_limit`.
    pub fn search_budget(&self) -> Duration {
        self.time_limit.mul_f64(self.compute_fraction)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        if self.time_limit > Duration::from_secs(MAX_TIME_LIMIT_SECS) {
            return Err(format!(
                "time_limit must be at most {MAX_TIME_LIMIT_SECS} seconds, got {:?}",
                self.time_limit
            ));
        }
        if !(self.compute_fraction > 0.0 && self.compute_fraction <= 1.0) {
            return Err(format!(
                "compute_fraction must be in (0, 1], got {}",
                self.compute_fraction
            ));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.final_temperature.is_nan() || self.final_temperature < 0.0 {
            return Err("final_temperature must be non-negative".into());
        }
        if self.final_temperature >= self.initial_temperature {
            return Err("final_temperature must be less than initial_temperature".into());
        }
        if !self.acceptance_scale.is_finite() || self.acceptance_scale <= 0.0 {
            return Err(format!(
                "acceptance_scale must be positive, got {}",
                self.acceptance_scale
            ));
        }
        if self.report_interval.is_zero() {
            return Err("report_interval must be positive".into());
        }
        Ok(())
    }
}
