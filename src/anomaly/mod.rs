//! Online anomaly detection
//!
//! [`StreamStats`] classifies each value of a scalar stream against the
//! running mean and standard deviation of the values before it, and tracks
//! an EWMA trend along the way.
//!
//! # Example
//!
//! ```
//! use streamstats::anomaly::{Config, ReturnType, StreamStats};
//!
//! let config = Config::default().with_return_type(ReturnType::Ratio);
//! let mut detector = StreamStats::with_config(config).unwrap();
//!
//! for value in [10.0, 11.0, 9.0, 10.5, 9.5] {
//!     detector.push(value);
//! }
//!
//! let meta = detector.push_meta(10.2);
//! assert!(meta.anomaly.as_ratio().unwrap() < 1.0);
//! println!("mean {} stddev {} trend {}", meta.mean, meta.stddev, meta.trend);
//! ```

mod config;
mod detector;
mod verdict;

pub use config::{Config, ReturnType, DEFAULT_CONFIDENCE_INTERVAL};
pub use detector::StreamStats;
pub use verdict::{PushMeta, Verdict};
