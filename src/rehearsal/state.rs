//! State space of rehearsal orderings.
//!
//! An ordering is a permutation of `0..n`. Both operations draw every random
//! number from the caller's RNG so runs can be replayed from a seed.

use rand::Rng;

/// Draws an ordering uniformly at random among all `n!` permutations.
///
/// Repeatedly picks a uniform index into the shrinking array of unused
/// pieces and `swap_remove`s it, O(n) in total.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::rehearsal::random_state;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
/// let mut state = random_state(5, &mut rng);
/// state.sort_unstable();
/// assert_eq!(state, vec![0, 1, 2, 3, 4]);
/// ```
pub fn random_state<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut candidates: Vec<usize> = (0..n).collect();
    let mut state = Vec::with_capacity(n);

    while !candidates.is_empty() {
        let pick = rng.random_range(0..candidates.len());
        state.push(candidates.swap_remove(pick));
    }

    state
}

/// Returns a copy of `state` with two distinct positions transposed.
///
/// The first position is uniform over all `n` positions; the second is
/// uniform over the `n - 1` positions left. Orderings shorter than two are
/// returned unchanged.
///
/// # Complexity
/// O(n) for the copy, O(1) for the move.
pub fn neighbour<R: Rng>(state: &[usize], rng: &mut R) -> Vec<usize> {
    let mut next = state.to_vec();
    let n = next.len();
    if n < 2 {
        return next;
    }

    let first = rng.random_range(0..n);
    // Index into the positions with `first` removed.
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }

    next.swap(first, second);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_random_state_is_permutation() {
        let mut rng = SmallRng::seed_from_u64(42);
        for n in [1, 2, 7, 64] {
            let mut state = random_state(n, &mut rng);
            state.sort_unstable();
            assert_eq!(state, (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_random_state_empty() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(random_state(0, &mut rng).is_empty());
    }

    #[test]
    fn test_random_state_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        let draws = 60_000;
        for _ in 0..draws {
            *counts.entry(random_state(3, &mut rng)).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = draws as f64 / 6.0;
        for (perm, &count) in &counts {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "{perm:?} drawn {count} times");
        }
    }

    #[test]
    fn test_neighbour_swaps_two_positions() {
        let mut rng = SmallRng::seed_from_u64(9);
        let state: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            let next = neighbour(&state, &mut rng);
            let diffs: Vec<usize> = (0..10).filter(|&i| next[i] != state[i]).collect();
            assert_eq!(diffs.len(), 2);
            assert_eq!(next[diffs[0]], state[diffs[1]]);
            assert_eq!(next[diffs[1]], state[diffs[0]]);
        }
    }

    #[test]
    fn test_neighbour_leaves_input_untouched() {
        let mut rng = SmallRng::seed_from_u64(1);
        let state = vec![3, 1, 0, 2];
        let _ = neighbour(&state, &mut rng);
        assert_eq!(state, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_neighbour_short_states() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(neighbour(&[], &mut rng).is_empty());
        assert_eq!(neighbour(&[0], &mut rng), vec![0]);
        assert_eq!(neighbour(&[0, 1], &mut rng), vec![1, 0]);
    }

    #[test]
    fn test_neighbour_ordered_pairs_uniform() {
        let mut rng = SmallRng::seed_from_u64(5);
        let state = vec![0, 1, 2, 3];
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        let draws = 60_000;
        for _ in 0..draws {
            *counts.entry(neighbour(&state, &mut rng)).or_default() += 1;
        }

        // 6 distinct transpositions, each reached by two ordered pairs.
        assert_eq!(counts.len(), 6);
        let expected = draws as f64 / 6.0;
        for &count in counts.values() {
            assert!((count as f64 - expected).abs() / expected < 0.05);
        }
    }
}
