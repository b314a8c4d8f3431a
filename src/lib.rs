//! # Streamstats
//!
//! Online anomaly detection for scalar streams.
//!
//! Streamstats judges every observation of a numeric stream against the
//! distribution seen so far, in a single pass with constant memory and no
//! buffered history.
//!
//! ## Features
//!
//! - **Running Moments**: Welford's numerically stable mean and variance
//! - **Anomaly Verdicts**: σ-boundary classification, as a flag or a ratio
//! - **Trend Tracking**: Exponentially weighted moving average of the stream
//! - **O(1) Updates**: Fixed-size state, no allocation
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstats::prelude::*;
//!
//! let mut detector = StreamStats::new();
//!
//! for latency_ms in [100.0, 102.0, 98.0, 101.0, 99.0] {
//!     detector.push(latency_ms);
//! }
//!
//! let meta = detector.push_meta(5000.0);
//! assert!(meta.anomaly.is_anomaly());
//! println!("mean {:.1}, stddev {:.1}, trend {:.1}", meta.mean, meta.stddev, meta.trend);
//! ```
//!
//! ## Verdicts
//!
//! The [`ReturnType`](anomaly::ReturnType) picks the verdict shape:
//!
//! ```rust
//! use streamstats::anomaly::{Config, ReturnType, StreamStats, Verdict};
//!
//! let config = Config::default()
//!     .with_confidence_interval(2.0)
//!     .with_return_type(ReturnType::Ratio);
//! let mut detector = StreamStats::with_config(config).unwrap();
//!
//! // No spread yet: the boundary is zero and the ratio is infinite
//! assert_eq!(detector.push(1.0), Verdict::Ratio(f64::INFINITY));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support; without it math goes through `libm`
//! - `serde`: Serialization of configs and verdicts; needs `alloc` but not `std`,
//!   check with `cargo build --no-default-features --features serde,tracing`
//! - `tracing`: Debug/trace events on construction, reset and flagged values
//! - `full`: Enable all features

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core traits always available
pub mod traits;

pub mod anomaly;
pub mod statistics;
pub mod trend;

mod math;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::anomaly::{Config, PushMeta, ReturnType, StreamStats, Verdict};
    pub use crate::statistics::RunningMoments;
    pub use crate::trend::Trend;
}

pub use anomaly::StreamStats;
