//! Property-based checks of the state space, cost model, cooling schedule
//! and acceptance rule.

use orchestra_scheduler::problem::ProblemInstance;
use orchestra_scheduler::rehearsal::{cost, neighbour, random_state, wait_times};
use orchestra_scheduler::sa::{gibbs_probability, HyperbolicCooling, DEFAULT_ACCEPTANCE_SCALE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

fn instance() -> impl Strategy<Value = ProblemInstance> {
    (1usize..6, 1usize..9).prop_flat_map(|(solists, pieces)| {
        (
            prop::collection::vec(prop::collection::vec(any::<bool>(), pieces), solists),
            prop::collection::vec(0u32..100, pieces),
            prop::collection::vec(0u32..50, solists),
        )
            .prop_map(|(needs, lengths, salaries)| {
                ProblemInstance::new(
                    needs,
                    lengths.into_iter().map(f64::from).collect(),
                    salaries.into_iter().map(f64::from).collect(),
                )
                .unwrap()
            })
    })
}

proptest! {
    #[test]
    fn random_state_is_a_permutation(n in 1usize..200, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = random_state(n, &mut rng);
        state.sort_unstable();
        prop_assert_eq!(state, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn neighbour_transposes_exactly_two(n in 2usize..100, seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let state = random_state(n, &mut rng);
        let next = neighbour(&state, &mut rng);

        let diffs: Vec<usize> = (0..n).filter(|&i| state[i] != next[i]).collect();
        prop_assert_eq!(diffs.len(), 2);

        let mut a = state.clone();
        let mut b = next.clone();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn cost_is_pure_and_non_negative(problem in instance(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ordering = random_state(problem.nbr_pieces(), &mut rng);

        let first = cost(&problem, &ordering);
        prop_assert_eq!(first, cost(&problem, &ordering));
        prop_assert!(first >= 0.0);
        prop_assert_eq!(wait_times(&problem, &ordering).len(), problem.nbr_solists());
    }

    #[test]
    fn wait_never_exceeds_total_length(problem in instance(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ordering = random_state(problem.nbr_pieces(), &mut rng);
        let total: f64 = problem.pieces_length().iter().sum();

        for wait in wait_times(&problem, &ordering) {
            prop_assert!(wait >= 0.0 && wait <= total);
        }
    }

    #[test]
    fn improvements_always_accepted(
        e1 in -1e9f64..1e9,
        gap in 1e-3f64..1e6,
        t in 1e-12f64..1e20,
    ) {
        prop_assert_eq!(gibbs_probability(e1, e1 - gap, t, DEFAULT_ACCEPTANCE_SCALE), 1.0);
    }

    #[test]
    fn worsening_probability_in_unit_interval(
        e1 in 0f64..1e6,
        gap in 0f64..1e3,
        t in 1e6f64..1e20,
    ) {
        let p = gibbs_probability(e1, e1 + gap, t, DEFAULT_ACCEPTANCE_SCALE);
        prop_assert!(p >= 0.0 && p <= 1.0, "p = {}", p);
        prop_assert!(!p.is_nan());
    }

    #[test]
    fn cooling_is_non_increasing(
        window_ms in 1u64..100_000,
        a in 0f64..1.0,
        b in 0f64..1.0,
    ) {
        let start = Instant::now();
        let window = Duration::from_millis(window_ms);
        let cooling = HyperbolicCooling::new(start, start + window, 1e18, 0.0);

        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let secs = window.as_secs_f64();
        prop_assert!(cooling.temperature_after(early * secs) >= cooling.temperature_after(late * secs));
    }
}
