//! Wait-time cost model.
//!
//! A solist is on call from the first to the last piece they play in. Every
//! piece in between that they do not play in is idle time paid at their
//! salary. The cost of an ordering is the sum of those idle wages.

use crate::problem::ProblemInstance;

/// Dot product of `a` and `b` over their common prefix.
///
/// Extra trailing entries of the longer operand are ignored.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::rehearsal::dot_product;
///
/// assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0]), 14.0);
/// ```
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Idle time of every solist for `ordering`.
///
/// For solist `s`, `first` and `last` are the positions of their first and
/// last needed piece in `ordering`, and the entry is the total length of
/// the pieces strictly between them that `s` does not play in. A solist
/// who is never needed gets `first = last = 0` and waits for nothing.
///
/// # Complexity
/// O(nbr_solists * nbr_pieces)
///
/// # Panics
/// Panics if `ordering` holds a piece index outside the instance.
pub fn wait_times(problem: &ProblemInstance, ordering: &[usize]) -> Vec<f64> {
    let lengths = problem.pieces_length();

    problem
        .need_matrix()
        .iter()
        .map(|needs| {
            let needed_at = |&piece: &usize| needs[piece];
            let first = ordering.iter().position(needed_at).unwrap_or(0);
            let last = ordering.iter().rposition(needed_at).unwrap_or(0);

            if last <= first + 1 {
                return 0.0;
            }
            ordering[first + 1..last]
                .iter()
                .filter(|&&piece| !needs[piece])
                .map(|&piece| lengths[piece])
                .sum::<f64>()
        })
        .collect()
}

/// Wage cost of `ordering`: salaries dotted with [`wait_times`].
///
/// Pure: the same instance and ordering always give the same cost.
pub fn cost(problem: &ProblemInstance, ordering: &[usize]) -> f64 {
    dot_product(problem.salaries(), &wait_times(problem, ordering))
}
