//! Statistical summaries for streaming data
//!
//! This module provides algorithms for computing statistics over streams
//! in a single pass with constant memory.
//!
//! # Example
//!
//! ```
//! use streamstats::statistics::RunningMoments;
//!
//! let mut moments = RunningMoments::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     moments.add(value);
//! }
//!
//! println!("Mean: {}", moments.mean());
//! println!("Stddev: {}", moments.standard_deviation());
//! ```

mod moments;

pub use moments::{Baseline, RunningMoments};
