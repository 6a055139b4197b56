//! Configuration for the phi accrual failure detector.

use core::time::Duration;

use super::config_error::PhiAccrualConfigError;

/// Configuration options for
/// [`PhiAccrualFailureDetector`](super::PhiAccrualFailureDetector).
///
/// `acceptable_heartbeat_pause` has no validated constraint because
/// [`Duration`] cannot go negative; every other field is checked by
/// [`PhiAccrualFailureDetectorConfig::validate`] at detector construction.
#[derive(Clone, Debug)]
pub struct PhiAccrualFailureDetectorConfig {
  threshold:                  f64,
  max_sample_size:            usize,
  min_std_deviation:          Duration,
  acceptable_heartbeat_pause: Duration,
  first_heartbeat_estimate:   Duration,
}

impl PhiAccrualFailureDetectorConfig {
  /// Creates a configuration from explicit values.
  #[must_use]
  pub const fn new(
    threshold: f64,
    max_sample_size: usize,
    min_std_deviation: Duration,
    acceptable_heartbeat_pause: Duration,
    first_heartbeat_estimate: Duration,
  ) -> Self {
    Self {
      threshold,
      max_sample_size,
      min_std_deviation,
      acceptable_heartbeat_pause,
      first_heartbeat_estimate,
    }
  }

  /// Overrides the suspicion threshold.
  ///
  /// A low threshold is prone to wrong suspicions but detects real crashes
  /// quickly; a high threshold makes fewer mistakes but needs more time.
  #[must_use]
  pub const fn with_threshold(mut self, threshold: f64) -> Self {
    self.threshold = threshold;
    self
  }

  /// Overrides the number of samples retained for the interval statistics.
  #[must_use]
  pub const fn with_max_sample_size(mut self, max_sample_size: usize) -> Self {
    self.max_sample_size = max_sample_size;
    self
  }

  /// Overrides the floor applied to the computed standard deviation.
  ///
  /// Too low a floor makes the detector overly sensitive to sudden but normal
  /// deviations in heartbeat inter-arrival times.
  #[must_use]
  pub const fn with_min_std_deviation(mut self, min_std_deviation: Duration) -> Self {
    self.min_std_deviation = min_std_deviation;
    self
  }

  /// Overrides the grace margin added to the expected interval mean.
  ///
  /// Corresponds to the number of potentially lost or delayed heartbeats
  /// accepted before an anomaly, surviving occasional pauses from garbage
  /// collection or network drops.
  #[must_use]
  pub const fn with_acceptable_heartbeat_pause(mut self, acceptable_heartbeat_pause: Duration) -> Self {
    self.acceptable_heartbeat_pause = acceptable_heartbeat_pause;
    self
  }

  /// Overrides the duration seeding the bootstrap history mean.
  #[must_use]
  pub const fn with_first_heartbeat_estimate(mut self, first_heartbeat_estimate: Duration) -> Self {
    self.first_heartbeat_estimate = first_heartbeat_estimate;
    self
  }

  /// Returns the configured suspicion threshold.
  #[must_use]
  pub const fn threshold(&self) -> f64 {
    self.threshold
  }

  /// Returns the configured sample capacity.
  #[must_use]
  pub const fn max_sample_size(&self) -> usize {
    self.max_sample_size
  }

  /// Returns the configured standard deviation floor.
  #[must_use]
  pub const fn min_std_deviation(&self) -> Duration {
    self.min_std_deviation
  }

  /// Returns the configured acceptable heartbeat pause.
  #[must_use]
  pub const fn acceptable_heartbeat_pause(&self) -> Duration {
    self.acceptable_heartbeat_pause
  }

  /// Returns the configured first heartbeat estimate.
  #[must_use]
  pub const fn first_heartbeat_estimate(&self) -> Duration {
    self.first_heartbeat_estimate
  }

  /// Checks every constraint, reporting the first violated parameter.
  pub fn validate(&self) -> Result<(), PhiAccrualConfigError> {
    // negated comparison so a NaN threshold is rejected as well
    if !(self.threshold > 0.0) {
      return Err(PhiAccrualConfigError::NonPositiveThreshold);
    }
    if self.max_sample_size == 0 {
      return Err(PhiAccrualConfigError::ZeroMaxSampleSize);
    }
    if self.min_std_deviation.is_zero() {
      return Err(PhiAccrualConfigError::ZeroMinStdDeviation);
    }
    if self.first_heartbeat_estimate.is_zero() {
      return Err(PhiAccrualConfigError::ZeroFirstHeartbeatEstimate);
    }
    Ok(())
  }
}

impl Default for PhiAccrualFailureDetectorConfig {
  fn default() -> Self {
    Self::new(
      8.0,
      1000,
      Duration::from_millis(100),
      Duration::from_secs(3),
      Duration::from_secs(1),
    )
  }
}
