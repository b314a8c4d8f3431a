//! Detector configuration

use crate::traits::ConfigError;

/// Default standard-deviation multiplier (3σ, about 99.73% coverage)
pub const DEFAULT_CONFIDENCE_INTERVAL: f64 = 3.0;

/// Shape of the verdict returned for each observation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ReturnType {
    /// `true` when the deviation exceeds the boundary
    #[default]
    Boolean,
    /// Deviation divided by the boundary; above 1.0 is anomalous
    Ratio,
}

impl ReturnType {
    /// Numeric code: 1 for boolean, 2 for ratio
    pub fn code(self) -> u8 {
        match self {
            ReturnType::Boolean => 1,
            ReturnType::Ratio => 2,
        }
    }
}

impl TryFrom<u8> for ReturnType {
    type Error = ConfigError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ReturnType::Boolean),
            2 => Ok(ReturnType::Ratio),
            other => Err(ConfigError::UnknownReturnType(other)),
        }
    }
}

/// Configuration record for a [`StreamStats`](super::StreamStats)
///
/// The confidence interval is the multiplier on the standard deviation that
/// bounds normal values:
///
/// | σ | coverage |
/// |---|----------|
/// | 1 | 68.27% |
/// | 2 | 95.45% |
/// | 3 | 99.73% |
/// | 3.5 | 99.9534% |
/// | 4 | 99.9936% |
///
/// # Example
///
/// ```
/// use streamstats::anomaly::{Config, ReturnType};
///
/// let config = Config::default()
///     .with_confidence_interval(4.0)
///     .with_return_type(ReturnType::Ratio);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Standard-deviation multiplier defining the anomaly boundary
    pub confidence_interval: f64,
    /// Verdict representation
    pub return_type: ReturnType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confidence_interval: DEFAULT_CONFIDENCE_INTERVAL,
            return_type: ReturnType::Boolean,
        }
    }
}

impl Config {
    /// Build a config from optional fields, defaulting the missing ones
    ///
    /// `return_code` uses the numeric codes of [`ReturnType::code`].
    pub fn from_options(
        confidence_interval: Option<f64>,
        return_code: Option<u8>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(ci) = confidence_interval {
            config.confidence_interval = ci;
        }
        if let Some(code) = return_code {
            config.return_type = ReturnType::try_from(code)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set the confidence interval
    pub fn with_confidence_interval(mut self, confidence_interval: f64) -> Self {
        self.confidence_interval = confidence_interval;
        self
    }

    /// Set the verdict representation
    pub fn with_return_type(mut self, return_type: ReturnType) -> Self {
        self.return_type = return_type;
        self
    }

    /// Check that the confidence interval is finite and positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.confidence_interval.is_finite() || self.confidence_interval <= 0.0 {
            return Err(ConfigError::InvalidConfidenceInterval(
                self.confidence_interval,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.confidence_interval, 3.0);
        assert_eq!(config.return_type, ReturnType::Boolean);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_return_type_codes() {
        assert_eq!(ReturnType::try_from(1), Ok(ReturnType::Boolean));
        assert_eq!(ReturnType::try_from(2), Ok(ReturnType::Ratio));
        assert_eq!(
            ReturnType::try_from(0),
            Err(ConfigError::UnknownReturnType(0))
        );
        assert_eq!(ReturnType::Boolean.code(), 1);
        assert_eq!(ReturnType::Ratio.code(), 2);
    }

    #[test]
    fn test_from_options() {
        let config = Config::from_options(None, None).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_options(Some(2.5), Some(2)).unwrap();
        assert_eq!(config.confidence_interval, 2.5);
        assert_eq!(config.return_type, ReturnType::Ratio);

        assert_eq!(
            Config::from_options(None, Some(9)),
            Err(ConfigError::UnknownReturnType(9))
        );
    }

    #[test]
    fn test_rejects_bad_confidence_interval() {
        for ci in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Config::default()
                .with_confidence_interval(ci)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidConfidenceInterval(_)));
        }
    }
}
