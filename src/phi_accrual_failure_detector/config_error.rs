//! Error variants produced when validating detector configuration.

use std::error::Error;
use std::fmt;

/// Error raised when a configuration constraint is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhiAccrualConfigError {
  /// `threshold` must be strictly positive.
  NonPositiveThreshold,
  /// `max_sample_size` must be at least 1.
  ZeroMaxSampleSize,
  /// `min_std_deviation` must be strictly positive.
  ZeroMinStdDeviation,
  /// `first_heartbeat_estimate` must be strictly positive.
  ZeroFirstHeartbeatEstimate,
}

impl fmt::Display for PhiAccrualConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::NonPositiveThreshold => write!(f, "threshold must be > 0"),
      | Self::ZeroMaxSampleSize => write!(f, "max_sample_size must be >= 1"),
      | Self::ZeroMinStdDeviation => write!(f, "min_std_deviation must be > 0"),
      | Self::ZeroFirstHeartbeatEstimate => write!(f, "first_heartbeat_estimate must be > 0"),
    }
  }
}

impl Error for PhiAccrualConfigError {}
