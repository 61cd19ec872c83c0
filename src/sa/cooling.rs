//! Wall-clock cooling schedule.
//!
//! The temperature is a smooth, monotone non-increasing S-curve of time:
//!
//! ```text
//! T(t) = 0.5 * (T0 - T1) * (1 - tanh((10 / (end - start)) * (t - (start + end) / 2))) + T1
//! ```
//!
//! It starts near `T0`, drops fastest around the midpoint of the window and
//! ends near `T1`. Because `tanh(5) ~ 0.99991`, the endpoints are reached
//! within about `5e-5 * (T0 - T1)`.

use std::time::{Duration, Instant};

/// Steepness numerator: the slope factor is `STEEPNESS / (end - start)`.
pub const STEEPNESS: f64 = 10.0;

/// Hyperbolic-tangent cooling over the window `[start, end]`.
///
/// # Examples
///
/// ```
/// use orchestra_scheduler::sa::HyperbolicCooling;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let cooling = HyperbolicCooling::new(start, start + Duration::from_secs(10), 1000.0, 0.0);
/// assert!((cooling.temperature_at(start + Duration::from_secs(5)) - 500.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HyperbolicCooling {
    start: Instant,
    window: Duration,
    initial_temperature: f64,
    final_temperature: f64,
}

impl HyperbolicCooling {
    /// Creates the schedule. An `end` at or before `start` gives an empty
    /// window: `initial_temperature` before `start`, `final_temperature`
    /// from `start` on.
    pub fn new(
        start: Instant,
        end: Instant,
        initial_temperature: f64,
        final_temperature: f64,
    ) -> Self {
        Self {
            start,
            window: end.saturating_duration_since(start),
            initial_temperature,
            final_temperature,
        }
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.start + self.window
    }

    /// Temperature at wall-clock instant `t`.
    pub fn temperature_at(&self, t: Instant) -> f64 {
        let offset = if t >= self.start {
            (t - self.start).as_secs_f64()
        } else {
            -(self.start - t).as_secs_f64()
        };
        self.temperature_after(offset)
    }

    /// Temperature `offset` seconds after the start of the window.
    /// Negative offsets are before the start.
    pub fn temperature_after(&self, offset: f64) -> f64 {
        let window = self.window.as_secs_f64();
        if window <= 0.0 {
            return if offset < 0.0 {
                self.initial_temperature
            } else {
                self.final_temperature
            };
        }

        let x = (STEEPNESS / window) * (offset - window / 2.0);
        0.5 * (self.initial_temperature - self.final_temperature) * (1.0 - x.tanh())
            + self.final_temperature
    }
}

/// Builds the cooling function for `[start, end]`, cooling from
/// `initial_temperature` down to zero.
pub fn make_schedule(
    start: Instant,
    end: Instant,
    initial_temperature: f64,
) -> impl Fn(Instant) -> f64 {
    let cooling = HyperbolicCooling::new(start, end, initial_temperature, 0.0);
    move |t| cooling.temperature_at(t)
}
