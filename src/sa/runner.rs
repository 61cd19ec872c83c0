//! SA execution loop.

use super::acceptance::gibbs_probability;
use super::config::SaConfig;
use super::cooling::HyperbolicCooling;
use super::monitor::{NoOpObserver, ProgressObserver, SaProgress};
use super::types::SaProblem;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature at the last iteration.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted strictly improving moves.
    pub improving_moves: usize,

    /// Wall-clock time spent from the start of the search to its end.
    pub elapsed: Duration,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost at the start, at every progress report and at the end.
    pub cost_history: Vec<f64>,
}

/// Executes the time-bounded Simulated Annealing algorithm.
///
/// The search loop runs until `compute_fraction * time_limit` has elapsed.
/// Each iteration draws a neighbor of the current state, computes its
/// energy, reads the temperature off the wall clock and moves there with
/// the Gibbs probability. The best state ever evaluated is kept separately:
/// a candidate better than the best so far is recorded even when the walk
/// itself does not move to it.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization without progress reporting.
    ///
    /// # Panics
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> SaResult<P::Solution> {
        Self::run_with_observer(problem, config, &mut NoOpObserver)
    }

    /// Runs SA, reporting progress to `observer`.
    ///
    /// # Panics
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_observer<P, O>(
        problem: &P,
        config: &SaConfig,
        observer: &mut O,
    ) -> SaResult<P::Solution>
    where
        P: SaProblem,
        O: ProgressObserver + ?Sized,
    {
        Self::run_with_cancel(problem, config, observer, None)
    }

    /// Runs SA with progress reporting and an optional cancellation token.
    ///
    /// The RNG is seeded from `config.seed`, or from OS entropy when unset.
    ///
    /// # Panics
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_cancel<P, O>(
        problem: &P,
        config: &SaConfig,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult<P::Solution>
    where
        P: SaProblem,
        O: ProgressObserver + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng, observer, cancel)
    }

    /// Runs SA drawing every random number from `rng`. `config.seed` is
    /// ignored.
    ///
    /// # Panics
    /// Panics if `config` fails [`SaConfig::validate`].
    pub fn run_with_rng<P, R, O>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        observer: &mut O,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult<P::Solution>
    where
        P: SaProblem,
        R: Rng,
        O: ProgressObserver + ?Sized,
    {
        if let Err(e) = config.validate() {
            panic!("invalid SaConfig: {e}");
        }

        let start = Instant::now();
        let deadline = far_deadline(start, config.search_budget());
        let cooling = HyperbolicCooling::new(
            start,
            deadline,
            config.initial_temperature,
            config.final_temperature,
        );

        // Initialize
        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        debug!(
            "SA started: budget {:?}, initial cost {current_cost}",
            config.search_budget()
        );

        let mut temperature = cooling.temperature_at(start);
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![best_cost];
        let snapshot = |now: Instant, iterations, current_cost, best_cost, temperature| {
            let elapsed = now.saturating_duration_since(start);
            let window = config.search_budget().as_secs_f64();
            SaProgress {
                elapsed,
                fraction: (elapsed.as_secs_f64() / window).clamp(0.0, 1.0),
                iterations,
                current_cost,
                best_cost,
                temperature,
            }
        };

        observer.on_progress(&snapshot(start, 0, current_cost, best_cost, temperature));
        let mut last_report = start;
        let mut now = Instant::now();

        while now < deadline {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            temperature = cooling.temperature_at(Instant::now());

            let probability = gibbs_probability(
                current_cost,
                candidate_cost,
                temperature,
                config.acceptance_scale,
            );
            let accept = probability > rng.random::<f64>();

            // Elitist memory, independent of the walk.
            if candidate_cost < best_cost {
                best = candidate.clone();
                best_cost = candidate_cost;
            }

            if accept {
                if candidate_cost < current_cost {
                    improving_moves += 1;
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
            }

            iterations += 1;
            now = Instant::now();

            if now.saturating_duration_since(last_report) >= config.report_interval {
                cost_history.push(best_cost);
                observer.on_progress(&snapshot(
                    now,
                    iterations,
                    current_cost,
                    best_cost,
                    temperature,
                ));
                last_report = now;
            }
        }

        if cancelled {
            warn!("SA cancelled after {iterations} iterations");
        }

        let end = Instant::now();
        cost_history.push(best_cost);

        let mut last = snapshot(end, iterations, current_cost, best_cost, temperature);
        if !cancelled {
            last.fraction = 1.0;
        }
        observer.on_finish(&last);

        info!(
            "SA finished: {iterations} iterations, {accepted_moves} accepted, best cost {best_cost}"
        );

        SaResult {
            best,
            best_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            elapsed: end.saturating_duration_since(start),
            cancelled,
            cost_history,
        }
    }
}

/// `start + budget`, halving the budget until the sum fits in an `Instant`.
fn far_deadline(start: Instant, budget: Duration) -> Instant {
    let mut budget = budget;
    loop {
        if let Some(deadline) = start.checked_add(budget) {
            return deadline;
        }
        budget /= 2;
    }
}
