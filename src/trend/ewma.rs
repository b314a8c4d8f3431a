//! Exponentially weighted moving average
//!
//! ```text
//! t[1] = x[1]
//! t[n] = t[n-1] * (1 - factor) + factor * x[n]
//! ```

/// Smoothing factor applied to each new observation
pub const TREND_FACTOR: f64 = 0.1;

/// EWMA trend tracker
///
/// Undefined until the first observation, which seeds the trend unsmoothed.
/// Every later value moves it a fixed [`TREND_FACTOR`] of the way towards
/// the observation, so the trend is always a convex combination of the
/// values seen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Trend {
    value: Option<f64>,
}

impl Trend {
    /// Create a tracker with no trend yet
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Fold `value` into the trend and return the updated trend
    pub fn update(&mut self, value: f64) -> f64 {
        let next = match self.value {
            Some(last) => last * (1.0 - TREND_FACTOR) + TREND_FACTOR * value,
            None => value,
        };
        self.value = Some(next);
        next
    }

    /// Current trend, `None` before the first observation
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether any observation has been made
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }
}
