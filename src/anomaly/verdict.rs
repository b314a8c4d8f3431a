//! Per-observation results

/// Outcome of classifying one observation
///
/// The variant follows the detector's [`ReturnType`](super::ReturnType).
/// A ratio is `|x - μ| / (k σ)` and may be `inf` or `NaN` while the baseline
/// spread is zero; those are ordinary results, not errors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Verdict {
    /// Whether the deviation exceeded the boundary
    Flag(bool),
    /// Deviation relative to the boundary
    Ratio(f64),
}

impl Verdict {
    /// Whether the observation lies outside the boundary
    ///
    /// A `NaN` ratio (zero deviation over a zero boundary) is not anomalous.
    pub fn is_anomaly(&self) -> bool {
        match *self {
            Verdict::Flag(flag) => flag,
            Verdict::Ratio(ratio) => ratio > 1.0,
        }
    }

    /// The flag, if this is a boolean verdict
    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            Verdict::Flag(flag) => Some(flag),
            Verdict::Ratio(_) => None,
        }
    }

    /// The ratio, if this is a ratio verdict
    pub fn as_ratio(&self) -> Option<f64> {
        match *self {
            Verdict::Ratio(ratio) => Some(ratio),
            Verdict::Flag(_) => None,
        }
    }
}

/// Verdict bundled with the state after the observation was folded in
///
/// `mean` and `stddev` already include the observation, while `anomaly` was
/// decided against the state before it; the two need not agree.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushMeta {
    /// Verdict for the observation
    pub anomaly: Verdict,
    /// Running mean including the observation
    pub mean: f64,
    /// Sample standard deviation including the observation
    pub stddev: f64,
    /// EWMA trend including the observation
    pub trend: f64,
}
