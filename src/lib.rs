#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

//! Phi accrual failure detection for a single monitored resource.
//!
//! Implements 'The Phi Accrual Failure Detector' by Hayashibara et al.
//! [http://www.jaist.ac.jp/~defago/files/pdf/IS_RR_2004_010.pdf]
//!
//! Instead of a binary up/down verdict the detector exposes a continuous
//! suspicion level called phi, computed from the observed distribution of
//! heartbeat inter-arrival times. A configurable threshold decides when phi
//! counts as a failure, so sensitivity adapts to measured network jitter
//! rather than a fixed timeout.
//!
//! The detector state is an immutable snapshot behind a single epoch-protected
//! atomic cell. Queries never block; heartbeat recording runs an optimistic
//! compare-and-swap loop, so the detector can be shared freely across threads.

mod clock;
mod detector_state;
mod heartbeat_history;
mod interval_event_sink;
mod phi;
mod phi_accrual_failure_detector;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use interval_event_sink::IntervalEventSink;
pub use phi_accrual_failure_detector::{
  PhiAccrualConfigError, PhiAccrualFailureDetector, PhiAccrualFailureDetectorConfig,
};
