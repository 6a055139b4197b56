//! Observers notified of anomalously large heartbeat intervals.

use std::time::Duration;


/// Sink receiving heartbeat intervals judged anomalously large.
///
/// [`IntervalEventSink::offer`] is fire and forget: an implementation must
/// return promptly without blocking, dropping the event if it cannot be
/// accepted immediately, because it is invoked on the heartbeat recording
/// path.
pub trait IntervalEventSink: Send + Sync + 'static {
  /// Offers a grown heartbeat interval to the sink.
  fn offer(&self, interval: Duration);
}

impl IntervalEventSink for tokio::sync::mpsc::Sender<Duration> {
  fn offer(&self, interval: Duration) {
    if let Err(error) = self.try_send(interval) {
      log::debug!("heartbeat interval event dropped: {error}");
    }
  }
}
