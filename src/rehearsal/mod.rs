//! Rehearsal ordering as a Simulated Annealing problem.
//!
//! A solution is an ordering of the pieces: a permutation of
//! `0..nbr_pieces` giving the performance sequence. Its energy is the wage
//! bill of solists sitting idle between their first and last piece.

pub mod cost;
pub mod state;

pub use cost::{cost, dot_product, wait_times};
pub use state::{neighbour, random_state};

use crate::problem::ProblemInstance;
use crate::sa::SaProblem;
use rand::Rng;

impl SaProblem for ProblemInstance {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_state(self.nbr_pieces(), rng)
    }

    fn cost(&self, ordering: &Vec<usize>) -> f64 {
        cost(self, ordering)
    }

    fn neighbor<R: Rng>(&self, ordering: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        neighbour(ordering, rng)
    }
}
