//! Bounded, immutable window of heartbeat inter-arrival times.

#[cfg(test)]
mod tests;

/// Persistent window of interval samples with O(1) mean and variance.
///
/// Running sums are maintained alongside the samples so statistics never
/// require a pass over the window. [`HeartbeatHistory::append`] uses copy on
/// write: the receiver is left untouched and may still be read concurrently
/// through an older detector state snapshot.
#[derive(Debug, Clone)]
pub(crate) struct HeartbeatHistory {
  max_sample_size:      usize,
  intervals:            Vec<u64>,
  interval_sum:         u64,
  squared_interval_sum: u64,
}

impl HeartbeatHistory {
  /// Creates an empty history bounded to `max_sample_size` samples.
  ///
  /// The capacity is validated by the detector configuration and is at
  /// least 1.
  pub(crate) fn new(max_sample_size: usize) -> Self {
    Self {
      max_sample_size,
      intervals: Vec::with_capacity(max_sample_size),
      interval_sum: 0,
      squared_interval_sum: 0,
    }
  }

  /// Arithmetic mean of the retained samples, in milliseconds.
  ///
  /// Must not be called on an empty history; the detector seeds every history
  /// with bootstrap samples before the first statistics query.
  pub(crate) fn mean(&self) -> f64 {
    self.interval_sum as f64 / self.intervals.len() as f64
  }

  /// Population variance of the retained samples.
  ///
  /// Floating point rounding can produce a tiny negative value when all
  /// samples are near-identical, so the square root in
  /// [`HeartbeatHistory::std_deviation`] is only usable together with the
  /// standard deviation floor applied by the detector.
  pub(crate) fn variance(&self) -> f64 {
    let mean = self.mean();
    (self.squared_interval_sum as f64 / self.intervals.len() as f64) - (mean * mean)
  }

  /// Population standard deviation of the retained samples.
  pub(crate) fn std_deviation(&self) -> f64 {
    self.variance().sqrt()
  }

  /// Returns a new history with `interval_ms` appended.
  ///
  /// Below capacity the window grows; at capacity the oldest sample is
  /// evicted and its contribution removed from both running sums.
  #[must_use]
  pub(crate) fn append(&self, interval_ms: u64) -> Self {
    let (dropped, kept) = if self.intervals.len() < self.max_sample_size {
      (0, self.intervals.as_slice())
    } else {
      (self.intervals[0], &self.intervals[1..])
    };

    let mut intervals = Vec::with_capacity(self.max_sample_size);
    intervals.extend_from_slice(kept);
    intervals.push(interval_ms);

    Self {
      max_sample_size: self.max_sample_size,
      intervals,
      interval_sum: self.interval_sum - dropped + interval_ms,
      squared_interval_sum: self.squared_interval_sum - dropped * dropped + interval_ms * interval_ms,
    }
  }

  #[cfg(test)]
  pub(crate) fn sample_count(&self) -> usize {
    self.intervals.len()
  }
}
