//! Core traits for streaming accumulators
//!
//! Every accumulator implements the base [`Sketch`] trait. Detectors that
//! classify each observation against the stream seen so far additionally
//! implement [`AnomalyDetector`].

use core::fmt::Debug;

/// Error raised when a detector configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Confidence interval must be finite and strictly positive
    InvalidConfidenceInterval(f64),
    /// Return type code is neither 1 (boolean) nor 2 (ratio)
    UnknownReturnType(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidConfidenceInterval(v) => {
                write!(f, "invalid confidence interval: {} (must be finite and > 0)", v)
            }
            ConfigError::UnknownReturnType(code) => {
                write!(f, "unknown return type code: {} (expected 1 or 2)", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Core trait for all streaming accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed since the last reset
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Online anomaly detection over a scalar stream
///
/// Each observation is judged against the distribution of the values pushed
/// before it, then folded into the running state.
pub trait AnomalyDetector: Sketch<Item = f64> {
    /// Verdict returned for each observation
    type Verdict;

    /// Verdict bundled with the post-update baseline
    type Meta;

    /// Classify `value` and incorporate it into the running state
    fn push(&mut self, value: f64) -> Self::Verdict;

    /// Like [`push`](Self::push), also reporting mean, stddev and trend
    fn push_meta(&mut self, value: f64) -> Self::Meta;

    /// Current running mean
    fn mean(&self) -> f64;

    /// Current sample variance
    fn variance(&self) -> f64;

    /// Current sample standard deviation
    fn standard_deviation(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "std")]
    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::InvalidConfidenceInterval(-1.0).to_string(),
            "invalid confidence interval: -1 (must be finite and > 0)"
        );
        assert_eq!(
            ConfigError::UnknownReturnType(7).to_string(),
            "unknown return type code: 7 (expected 1 or 2)"
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_config_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::UnknownReturnType(0));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_config_error_eq() {
        assert_eq!(
            ConfigError::UnknownReturnType(3),
            ConfigError::UnknownReturnType(3)
        );
        assert_ne!(
            ConfigError::UnknownReturnType(3),
            ConfigError::InvalidConfidenceInterval(3.0)
        );
    }
}
