//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements the state space (initial state and neighbor
/// generation) and the energy function. The SA framework handles the
/// cooling schedule, the acceptance criterion and the deadline.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct TspProblem { distances: Vec<Vec<f64>> }
///
/// impl SaProblem for TspProblem {
///     type Solution = Vec<usize>;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
///         orchestra_scheduler::rehearsal::random_state(self.distances.len(), rng)
///     }
///
///     fn cost(&self, tour: &Vec<usize>) -> f64 {
///         tour.windows(2).map(|w| self.distances[w[0]][w[1]]).sum()
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
///         orchestra_scheduler::rehearsal::neighbour(tour, rng)
///     }
/// }
/// ```
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost (energy) of a solution. Lower is better.
    ///
    /// Must be deterministic: the runner compares energies of different
    /// solutions and keeps the best one by value.
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbor of the given solution.
    ///
    /// The neighbor is a fresh value; `solution` itself must not change.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
