//! Wall-clock backed time source.

use std::time::Instant;

use super::monotonic_clock::MonotonicClock;

/// Production clock reporting elapsed milliseconds since its construction.
///
/// Anchoring on [`Instant`] keeps the instants monotonic even when the system
/// wall clock is adjusted.
#[derive(Debug)]
pub struct SystemClock {
  origin: Instant,
}

impl SystemClock {
  /// Creates a clock with the zero origin fixed at the current instant.
  #[must_use]
  pub fn new() -> Self {
    Self { origin: Instant::now() }
  }
}

impl Default for SystemClock {
  fn default() -> Self {
    Self::new()
  }
}

impl MonotonicClock for SystemClock {
  fn now_millis(&self) -> u64 {
    self.origin.elapsed().as_millis() as u64
  }
}
