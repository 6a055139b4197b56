//! Concurrent stress scenario for the shared detector state.
//!
//! Not a unit test: verifies that the snapshot handling stays sound while
//! writers and readers hammer the detector from many threads at once.

use std::sync::Arc;
use std::thread;

use phi_accrual_rs::{PhiAccrualFailureDetector, PhiAccrualFailureDetectorConfig, SystemClock};

const WRITER_THREADS: usize = 8;
const READER_THREADS: usize = 8;
const ITERATIONS: usize = 1000;

fn stress_detector() -> PhiAccrualFailureDetector {
  // the default acceptable pause keeps availability insensitive to scheduler
  // stalls while threads hammer the detector
  let config = PhiAccrualFailureDetectorConfig::default();
  PhiAccrualFailureDetector::new(config, Arc::new(SystemClock::new())).expect("valid configuration")
}

fn verify_monitoring_and_available(detector: &PhiAccrualFailureDetector) {
  assert!(detector.is_available(), "detector should report resource available");
  assert!(detector.is_monitoring(), "detector should be monitoring");
}

#[test]
fn should_survive_concurrent_heartbeats_and_queries() {
  let detector = Arc::new(stress_detector());

  // ensure monitoring has started so readers never race the first heartbeat
  detector.heartbeat();
  verify_monitoring_and_available(&detector);

  let mut handles = Vec::with_capacity(WRITER_THREADS + READER_THREADS);

  for _ in 0..WRITER_THREADS {
    let detector = detector.clone();
    handles.push(thread::spawn(move || {
      for _ in 0..ITERATIONS {
        detector.heartbeat();
      }
    }));
  }

  for _ in 0..READER_THREADS {
    let detector = detector.clone();
    handles.push(thread::spawn(move || {
      for _ in 0..ITERATIONS {
        verify_monitoring_and_available(&detector);
      }
    }));
  }

  for handle in handles {
    handle.join().expect("stress thread panicked");
  }

  verify_monitoring_and_available(&detector);
}

#[test]
fn should_keep_phi_finite_under_concurrent_recording() {
  let detector = Arc::new(stress_detector());
  detector.heartbeat();

  let mut handles = Vec::new();
  for _ in 0..4 {
    let detector = detector.clone();
    handles.push(thread::spawn(move || {
      for _ in 0..ITERATIONS {
        detector.heartbeat();
        let value = detector.phi();
        assert!(value >= 0.0, "phi must never go negative, got {value}");
      }
    }));
  }

  for handle in handles {
    handle.join().expect("stress thread panicked");
  }
}
