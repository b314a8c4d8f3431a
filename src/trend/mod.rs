//! Trend estimation for streaming data
//!
//! An exponentially weighted moving average follows the level of a stream
//! with a fixed lag, using a single `f64` of state.
//!
//! # Example
//!
//! ```
//! use streamstats::trend::Trend;
//!
//! let mut trend = Trend::new();
//! trend.update(10.0);
//! let smoothed = trend.update(20.0);
//!
//! assert!((smoothed - 11.0).abs() < 1e-12);
//! ```

mod ewma;

pub use ewma::{Trend, TREND_FACTOR};
