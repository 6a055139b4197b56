//! Phi accrual failure detector for a single monitored resource.

mod config;
mod config_error;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_epoch::{self as epoch, Atomic, Guard, Owned};

pub use config::PhiAccrualFailureDetectorConfig;
pub use config_error::PhiAccrualConfigError;

use crate::clock::MonotonicClock;
use crate::detector_state::DetectorState;
use crate::heartbeat_history::HeartbeatHistory;
use crate::interval_event_sink::IntervalEventSink;
use crate::phi::phi;

/// Accrual failure detector reporting a continuous suspicion level.
///
/// The suspicion level grows as the current silence interval diverges from the
/// observed heartbeat inter-arrival distribution. A configurable threshold
/// decides when the level counts as a failure.
///
/// The detector is thread-safe and can be shared across threads without
/// additional synchronization: queries perform a single atomic snapshot read,
/// heartbeat recording runs an optimistic compare-and-swap loop, and replaced
/// snapshots are retired through epoch-based reclamation so concurrent readers
/// are never invalidated.
pub struct PhiAccrualFailureDetector {
  config:                        PhiAccrualFailureDetectorConfig,
  acceptable_heartbeat_pause_ms: u64,
  min_std_deviation_ms:          u64,
  first_heartbeat:               HeartbeatHistory,
  clock:                         Arc<dyn MonotonicClock>,
  event_sink:                    Option<Arc<dyn IntervalEventSink>>,
  state:                         Atomic<DetectorState>,
}

impl PhiAccrualFailureDetector {
  /// Creates a detector reading instants from `clock`.
  ///
  /// Fails when any configuration constraint is violated; no detector is
  /// produced in that case.
  pub fn new(
    config: PhiAccrualFailureDetectorConfig,
    clock: Arc<dyn MonotonicClock>,
  ) -> Result<Self, PhiAccrualConfigError> {
    Self::build(config, clock, None)
  }

  /// Creates a detector that also publishes grown heartbeat intervals to `sink`.
  ///
  /// An interval qualifies when it reaches half of the configured acceptable
  /// heartbeat pause while the resource is still judged available. With a zero
  /// pause every recorded interval qualifies.
  pub fn with_event_sink(
    config: PhiAccrualFailureDetectorConfig,
    clock: Arc<dyn MonotonicClock>,
    sink: Arc<dyn IntervalEventSink>,
  ) -> Result<Self, PhiAccrualConfigError> {
    Self::build(config, clock, Some(sink))
  }

  fn build(
    config: PhiAccrualFailureDetectorConfig,
    clock: Arc<dyn MonotonicClock>,
    event_sink: Option<Arc<dyn IntervalEventSink>>,
  ) -> Result<Self, PhiAccrualConfigError> {
    config.validate()?;

    let first_heartbeat = bootstrap_history(&config);
    let state = Atomic::new(DetectorState::new(first_heartbeat.clone(), None));

    Ok(Self {
      acceptable_heartbeat_pause_ms: to_millis(config.acceptable_heartbeat_pause()),
      min_std_deviation_ms: to_millis(config.min_std_deviation()),
      config,
      first_heartbeat,
      clock,
      event_sink,
      state,
    })
  }

  /// Configuration this detector was constructed with.
  #[must_use]
  pub fn config(&self) -> &PhiAccrualFailureDetectorConfig {
    &self.config
  }

  /// Notifies the detector that a heartbeat arrived from the monitored
  /// resource.
  ///
  /// The first heartbeat starts monitoring with the bootstrap history; the
  /// measured gap since "never" carries no information and is discarded. Later
  /// heartbeats append the measured interval to the history, unless the
  /// resource is currently judged unavailable: the first interval after a
  /// suspected failure spans the whole outage and would skew the statistics.
  ///
  /// Concurrent recordings race on the shared snapshot; losers recompute from
  /// the winner's snapshot and retry, so no heartbeat is ever lost.
  pub fn heartbeat(&self) {
    let guard = epoch::pin();
    loop {
      let now_ms = self.clock.now_millis();
      let current = self.state.load(Ordering::Acquire, &guard);
      // SAFETY: the cell always holds a live snapshot; retired snapshots are
      // only reclaimed after every pinned guard is released.
      let observed = unsafe { current.deref() };

      let mut grown_interval = None;
      let next_history = match observed.timestamp_ms() {
        | None => self.first_heartbeat.clone(),
        | Some(last_ms) => {
          let interval_ms = now_ms.saturating_sub(last_ms);
          if self.phi_of(observed, now_ms) < self.config.threshold() {
            if self.event_sink.is_some() && interval_ms >= self.acceptable_heartbeat_pause_ms / 2 {
              grown_interval = Some(interval_ms);
            }
            observed.history().append(interval_ms)
          } else {
            observed.history().clone()
          }
        },
      };

      let next = Owned::new(DetectorState::new(next_history, Some(now_ms)));
      match self
        .state
        .compare_exchange(current, next, Ordering::AcqRel, Ordering::Acquire, &guard)
      {
        | Ok(_) => {
          // SAFETY: the replaced snapshot is unreachable for new readers;
          // reclamation is deferred until in-flight guards unpin.
          unsafe { guard.defer_destroy(current) };
          // published only for the winning iteration, never on a retried one
          if let Some(interval_ms) = grown_interval {
            self.publish_grown_interval(interval_ms);
          }
          return;
        },
        | Err(_) => {},
      }
    }
  }

  /// Current suspicion level of the monitored resource.
  ///
  /// Returns 0.0 while no heartbeat has been received: an unmonitored
  /// resource is treated as healthy, not suspect.
  #[must_use]
  pub fn phi(&self) -> f64 {
    let now_ms = self.clock.now_millis();
    let guard = epoch::pin();
    self.phi_of(self.load_state(&guard), now_ms)
  }

  /// Returns `true` while the suspicion level stays below the configured
  /// threshold.
  #[must_use]
  pub fn is_available(&self) -> bool {
    self.phi() < self.config.threshold()
  }

  /// Returns `true` once the detector has received a heartbeat and started
  /// monitoring the resource.
  #[must_use]
  pub fn is_monitoring(&self) -> bool {
    let guard = epoch::pin();
    self.load_state(&guard).timestamp_ms().is_some()
  }

  fn load_state<'g>(&self, guard: &'g Guard) -> &'g DetectorState {
    // SAFETY: the cell always holds a live snapshot; retired snapshots are
    // only reclaimed after every pinned guard is released.
    unsafe { self.state.load(Ordering::Acquire, guard).deref() }
  }

  fn phi_of(&self, state: &DetectorState, now_ms: u64) -> f64 {
    let Some(last_ms) = state.timestamp_ms() else {
      return 0.0;
    };

    let elapsed_ms = now_ms.saturating_sub(last_ms);
    let history = state.history();
    let mean_ms = history.mean() + self.acceptable_heartbeat_pause_ms as f64;
    // f64::max returns the other operand for a NaN, so a variance that rounded
    // negative still lands on the configured floor
    let std_deviation_ms = history.std_deviation().max(self.min_std_deviation_ms as f64);

    phi(elapsed_ms as f64, mean_ms, std_deviation_ms)
  }

  fn publish_grown_interval(&self, interval_ms: u64) {
    if let Some(sink) = self.event_sink.as_ref() {
      log::debug!("heartbeat interval grew to {interval_ms}ms");
      sink.offer(Duration::from_millis(interval_ms));
    }
  }
}

impl Drop for PhiAccrualFailureDetector {
  fn drop(&mut self) {
    // SAFETY: drop has exclusive access, so no guard can still observe the
    // final snapshot.
    unsafe {
      let state = self.state.load(Ordering::Relaxed, epoch::unprotected());
      if !state.is_null() {
        drop(state.into_owned());
      }
    }
  }
}

/// Bootstrap history seeded from the first heartbeat estimate.
///
/// Two samples at `estimate -/+ estimate / 4` give an initial mean equal to
/// the estimate with a deliberately wide spread, since the environment is
/// unknown at the start.
fn bootstrap_history(config: &PhiAccrualFailureDetectorConfig) -> HeartbeatHistory {
  let estimate_ms = to_millis(config.first_heartbeat_estimate());
  let std_deviation_ms = estimate_ms / 4;
  HeartbeatHistory::new(config.max_sample_size())
    .append(estimate_ms - std_deviation_ms)
    .append(estimate_ms + std_deviation_ms)
}

/// Seconds scaled by 1e3 in floating point, then truncated to whole
/// milliseconds.
fn to_millis(duration: Duration) -> u64 {
  (duration.as_secs_f64() * 1e3) as u64
}
