//! Gibbs (Boltzmann) acceptance rule.

/// Default scaling constant `K` of the acceptance exponent.
///
/// Wage costs are large integers while the temperature starts near
/// [`DEFAULT_INITIAL_TEMPERATURE`](super::DEFAULT_INITIAL_TEMPERATURE);
/// `K` brings their ratio into a range where the probability actually moves
/// between 1 and 0 during the run.
pub const DEFAULT_ACCEPTANCE_SCALE: f64 = 1e7;

/// Probability of moving from energy `e_current` to `e_candidate`.
///
/// Strict improvements are always accepted (`1.0`). Otherwise the result is
/// `exp(scale * (e_current - e_candidate) / temperature)`, clamped to
/// `[0, 1]`.
///
/// Never panics and never returns NaN: a temperature at or below zero
/// (or NaN) freezes the search and yields `0.0` for non-improving moves,
/// an exponent that underflows yields `0.0`, and a huge temperature drives
/// the probability towards `1.0`.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::sa::gibbs_probability;
///
/// assert_eq!(gibbs_probability(10.0, 5.0, 1.0, 1e7), 1.0);
/// assert_eq!(gibbs_probability(10.0, 10.0, 1.0, 1e7), 1.0);
/// assert!(gibbs_probability(10.0, 20.0, 1e3, 1e7) < 1e-12);
/// ```
#[inline]
pub fn gibbs_probability(e_current: f64, e_candidate: f64, temperature: f64, scale: f64) -> f64 {
    if e_candidate < e_current {
        return 1.0;
    }
    if temperature.is_nan() || temperature <= 0.0 {
        return 0.0;
    }

    let p = (scale * (e_current - e_candidate) / temperature).exp();
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
