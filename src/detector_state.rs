//! Immutable detector state snapshot.

use crate::heartbeat_history::HeartbeatHistory;

/// Pairing of the current interval history with the last heartbeat instant.
///
/// A snapshot is never mutated after construction: heartbeat recording builds
/// a fresh snapshot and installs it wholesale, so readers always observe a
/// consistent history/timestamp pair. An absent timestamp means the resource
/// has never been observed and the history is still the bootstrap history.
#[derive(Debug)]
pub(crate) struct DetectorState {
  history:      HeartbeatHistory,
  timestamp_ms: Option<u64>,
}

impl DetectorState {
  /// Creates a snapshot from a history and an optional last-heartbeat instant.
  pub(crate) fn new(history: HeartbeatHistory, timestamp_ms: Option<u64>) -> Self {
    Self { history, timestamp_ms }
  }

  /// Interval history carried by this snapshot.
  pub(crate) fn history(&self) -> &HeartbeatHistory {
    &self.history
  }

  /// Instant of the last recorded heartbeat, if any.
  pub(crate) fn timestamp_ms(&self) -> Option<u64> {
    self.timestamp_ms
  }
}
