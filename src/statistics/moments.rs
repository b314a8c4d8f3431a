//! Running moments (mean, variance) with a lazily reset counter
//!
//! Computes streaming statistics using Welford's numerically stable online
//! algorithm. Each update also reports the baseline the incoming value was
//! measured against, so callers can classify it without a second pass.

use crate::math;
use crate::traits::Sketch;

/// Mean and standard deviation captured just before an update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    /// Mean of the values seen before the update
    pub mean: f64,
    /// Spread of the values seen before the update
    pub stddev: f64,
}

/// Running mean/variance accumulator using Welford's algorithm
///
/// Tracks the mean and the sum of squared deviations (`S`) in O(1) memory,
/// without storing any history. The sample variance is `S / (n - 1)`.
///
/// Resetting only rewinds the counter. The next [`add`](Self::add) re-seeds
/// the mean and the working `S`, while the committed `S` stays stale until
/// the second add after the reset: that add's baseline spread is read from
/// the pre-reset `S`. From then on a reset accumulator matches a new one.
///
/// # Example
///
/// ```
/// use streamstats::statistics::RunningMoments;
///
/// let mut moments = RunningMoments::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     moments.add(value);
/// }
///
/// assert!((moments.mean() - 5.0).abs() < 1e-9);
/// assert!((moments.variance() - 32.0 / 7.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RunningMoments {
    /// Number of values since the last reset
    count: u64,
    /// Running mean
    mean: f64,
    /// Mean the next update builds on
    prev_mean: f64,
    /// Sum of squared differences from the mean (S in Welford's algorithm)
    sum_sq: f64,
    /// S the next update builds on
    prev_sum_sq: f64,
}

impl RunningMoments {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the statistics
    pub fn add(&mut self, value: f64) {
        self.observe(value);
    }

    /// Add a value and return the baseline it was measured against
    ///
    /// The counter is advanced before the baseline is read, so the returned
    /// spread is `sqrt(S / (n - 1))` over the `n - 1` earlier values: their
    /// population standard deviation. The new value has no influence on it.
    /// On the first value after a reset the spread is zero; on the second it
    /// still comes from the `S` committed before the reset.
    pub fn observe(&mut self, value: f64) -> Baseline {
        self.count += 1;

        let baseline = Baseline {
            mean: self.mean(),
            stddev: self.standard_deviation(),
        };

        if self.count == 1 {
            self.mean = value;
            self.prev_mean = value;
            self.prev_sum_sq = 0.0;
        } else {
            let delta = value - self.prev_mean;
            self.mean = self.prev_mean + delta / self.count as f64;
            self.sum_sq = self.prev_sum_sq + delta * (value - self.mean);

            self.prev_mean = self.mean;
            self.prev_sum_sq = self.sum_sq;
        }

        baseline
    }

    /// Rewind the counter; aggregates are overwritten on the next add
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean, or 0 before any value
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.mean
        } else {
            0.0
        }
    }

    /// Get the sample variance (Bessel's correction), or 0 for fewer than two values
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.sum_sq / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Get the sample standard deviation
    pub fn standard_deviation(&self) -> f64 {
        math::sqrt(self.variance())
    }
}

impl Sketch for RunningMoments {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}
