//! Monotonic clock abstraction.

/// Capability producing the current instant on demand.
///
/// Instants are absolute milliseconds measured from an arbitrary but fixed
/// zero origin; only differences between instants are meaningful.
pub trait MonotonicClock: Send + Sync + 'static {
  /// Returns the latest monotonic instant in milliseconds.
  fn now_millis(&self) -> u64;
}
