//! Scripted time source for deterministic tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::monotonic_clock::MonotonicClock;

#[cfg(test)]
mod tests;

/// Deterministic clock replaying a pre-computed sequence of instants.
///
/// The script is built from millisecond offsets accumulated from a zero
/// origin: offsets `[0, 1000, 100]` yield the instants `0`, `1000`, `1100`.
/// Each [`MonotonicClock::now_millis`] call consumes the next instant; once
/// the script is exhausted the last instant is repeated, so a misconfigured
/// test observes a frozen clock rather than a panic.
#[derive(Debug)]
pub struct ManualClock {
  instants: Vec<u64>,
  cursor:   AtomicUsize,
}

impl ManualClock {
  /// Builds a clock from cumulative millisecond offsets.
  ///
  /// # Panics
  ///
  /// Panics when `offsets` is empty: a clock with no scripted instant has
  /// nothing to report.
  #[must_use]
  pub fn from_offsets(offsets: &[u64]) -> Self {
    assert!(!offsets.is_empty(), "manual clock requires at least one offset");
    let mut instants = Vec::with_capacity(offsets.len());
    let mut now = 0;
    for offset in offsets {
      now += offset;
      instants.push(now);
    }
    Self { instants, cursor: AtomicUsize::new(0) }
  }
}

impl MonotonicClock for ManualClock {
  fn now_millis(&self) -> u64 {
    let index = self.cursor.fetch_add(1, Ordering::Relaxed);
    self.instants[index.min(self.instants.len() - 1)]
  }
}
