//! Streaming anomaly detector
//!
//! Combines [`RunningMoments`] and [`Trend`] into a single-pass detector that
//! judges every value against the mean and spread of the values before it.

use super::{Config, PushMeta, ReturnType, Verdict};
use crate::math;
use crate::statistics::RunningMoments;
use crate::traits::{AnomalyDetector, ConfigError, Sketch};
use crate::trend::Trend;

/// Online anomaly detector for one scalar stream
///
/// Each [`push`](Self::push) runs in O(1) time and memory:
///
/// 1. capture the baseline mean `μ` and spread `σ` of the values seen so far
/// 2. fold the value into the Welford moments and the EWMA trend
/// 3. compare `|x - μ|` with the boundary `k σ`, `k` being the confidence interval
///
/// The spread is zero until two values have been seen, so the boundary is
/// zero too: a boolean detector flags any value different from the baseline
/// mean, and a ratio detector returns `inf` or `NaN`.
///
/// One instance serves one stream; use a fresh detector per stream.
///
/// # Example
///
/// ```
/// use streamstats::anomaly::StreamStats;
///
/// let mut detector = StreamStats::new();
///
/// for value in [100.0, 102.0, 98.0, 101.0, 99.0] {
///     detector.push(value);
/// }
///
/// assert!(detector.push(5000.0).is_anomaly());
/// ```
#[derive(Clone, Debug)]
pub struct StreamStats {
    config: Config,
    moments: RunningMoments,
    trend: Trend,
}

impl StreamStats {
    /// Create a detector with the default configuration (3σ, boolean verdicts)
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Create a detector from a validated configuration
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: Config) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            confidence_interval = config.confidence_interval,
            return_type = config.return_type.code(),
            "stream detector created"
        );

        Self {
            config,
            moments: RunningMoments::new(),
            trend: Trend::new(),
        }
    }

    /// Classify `value` and incorporate it into the running state
    pub fn push(&mut self, value: f64) -> Verdict {
        self.step(value).0
    }

    /// Classify `value` and report the updated mean, stddev and trend
    pub fn push_meta(&mut self, value: f64) -> PushMeta {
        let (anomaly, trend) = self.step(value);
        PushMeta {
            anomaly,
            mean: self.mean(),
            stddev: self.standard_deviation(),
            trend,
        }
    }

    fn step(&mut self, value: f64) -> (Verdict, f64) {
        let baseline = self.moments.observe(value);
        let trend = self.trend.update(value);

        let boundary = self.config.confidence_interval * baseline.stddev;
        let deviation = math::abs(value - baseline.mean);

        let verdict = match self.config.return_type {
            ReturnType::Boolean => Verdict::Flag(deviation > boundary),
            ReturnType::Ratio => Verdict::Ratio(deviation / boundary),
        };

        #[cfg(feature = "tracing")]
        if verdict.is_anomaly() {
            tracing::trace!(
                value,
                mean = baseline.mean,
                stddev = baseline.stddev,
                boundary,
                "anomalous observation"
            );
        }

        (verdict, trend)
    }

    /// Mark the stream as reset
    ///
    /// Only the counter is rewound. The next push re-seeds the mean, and the
    /// one after it is still judged against the pre-reset spread (see
    /// [`RunningMoments`]). The trend keeps smoothing across the reset.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(discarded = self.moments.len(), "stream detector reset");

        self.moments.reset();
    }

    /// Fold `value` into the trend alone and return the updated trend
    pub fn trend(&mut self, value: f64) -> f64 {
        self.trend.update(value)
    }

    /// Current trend, `None` before the first observation
    pub fn current_trend(&self) -> Option<f64> {
        self.trend.value()
    }

    /// Running mean, 0 before any observation
    pub fn mean(&self) -> f64 {
        self.moments.mean()
    }

    /// Sample variance, 0 for fewer than two observations
    pub fn variance(&self) -> f64 {
        self.moments.variance()
    }

    /// Sample standard deviation
    pub fn standard_deviation(&self) -> f64 {
        self.moments.standard_deviation()
    }

    /// Observations since the last reset
    pub fn count(&self) -> u64 {
        self.moments.len()
    }

    /// Standard-deviation multiplier defining the anomaly boundary
    pub fn confidence_interval(&self) -> f64 {
        self.config.confidence_interval
    }

    /// Shape of the verdicts returned by [`push`](Self::push)
    pub fn return_type(&self) -> ReturnType {
        self.config.return_type
    }

    /// Configuration the detector was built with
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for StreamStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch for StreamStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.push(*item);
    }

    fn clear(&mut self) {
        StreamStats::clear(self);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        StreamStats::count(self)
    }
}

impl AnomalyDetector for StreamStats {
    type Verdict = Verdict;
    type Meta = PushMeta;

    fn push(&mut self, value: f64) -> Verdict {
        StreamStats::push(self, value)
    }

    fn push_meta(&mut self, value: f64) -> PushMeta {
        StreamStats::push_meta(self, value)
    }

    fn mean(&self) -> f64 {
        StreamStats::mean(self)
    }

    fn variance(&self) -> f64 {
        StreamStats::variance(self)
    }

    fn standard_deviation(&self) -> f64 {
        StreamStats::standard_deviation(self)
    }
}
